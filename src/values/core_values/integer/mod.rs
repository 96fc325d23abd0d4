pub mod typed_integer;
