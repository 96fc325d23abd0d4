pub mod core_type;
pub mod definition;
pub mod descriptor;
pub mod error;
pub mod path;
pub mod registry;
pub mod type_key;
