pub mod typed_decimal;
