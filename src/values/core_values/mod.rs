pub mod array;
pub mod decimal;
pub mod enumeration;
pub mod integer;
pub mod nullable;
pub mod object;
pub mod structure;
pub mod text;
pub mod tuple;
