pub mod core_values;
pub mod traits;
pub mod value;
