pub mod identity;
pub mod structural_eq;
pub mod value_eq;
