pub mod equality;
pub mod logger;
pub mod types;
pub mod values;

pub use equality::{
    dispatch::{DispatchKey, Dispatcher},
    engine::EqualityEngine,
    facade::{
        dispatch_equals, dispatch_hash, hash_of, identity_equals, method_equals,
        numeric_equals, register_type, structural_equals, value_equals,
    },
    strategy::EqualityStrategy,
    structural::{ElementComparer, NumericComparer, Structural, ValueComparer},
};
pub use values::value::Value;
