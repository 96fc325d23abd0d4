//! Process-wide equality entry points for generic containers and
//! algorithms. They all run on one lazily created engine whose registry is
//! extended through [`register_type`].
//!
//! Strategies are never invalidated, so types must be registered before
//! the first comparison that involves them; a comparison of an
//! unregistered type binds it to identity comparison for good.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::debug;
use parking_lot::RwLock;

use crate::equality::{engine::EqualityEngine, structural::ElementComparer};
use crate::types::{
    definition::TypeDefinition, error::TypeRegistryError, registry::TypeRegistry,
};
use crate::values::value::Value;

pub use crate::equality::numeric::{method_equals, numeric_equals};

lazy_static! {
    static ref GLOBAL_TYPES: Arc<RwLock<TypeRegistry>> =
        Arc::new(RwLock::new(TypeRegistry::default()));
    static ref GLOBAL_ENGINE: EqualityEngine =
        EqualityEngine::new(GLOBAL_TYPES.clone());
}

pub fn global_engine() -> &'static EqualityEngine {
    &GLOBAL_ENGINE
}

pub fn register_type(definition: TypeDefinition) -> Result<(), TypeRegistryError> {
    let name = definition.name.clone();
    GLOBAL_TYPES.write().insert(definition)?;
    debug!("Registered type {name}");
    Ok(())
}

pub fn identity_equals(a: &Value, b: &Value) -> bool {
    GLOBAL_ENGINE.identity_equals(a, b)
}

pub fn value_equals(a: &Value, b: &Value) -> bool {
    GLOBAL_ENGINE.value_equals(a, b)
}

pub fn structural_equals(
    a: &Value,
    b: &Value,
    comparer: Option<&dyn ElementComparer>,
) -> bool {
    GLOBAL_ENGINE.structural_equals(a, b, comparer)
}

pub fn structural_hash(value: &Value, comparer: Option<&dyn ElementComparer>) -> u64 {
    GLOBAL_ENGINE.structural_hash(value, comparer)
}

pub fn hash_of(value: &Value) -> u64 {
    GLOBAL_ENGINE.hash_of(value)
}

pub fn dispatch_equals(a: &Value, b: &Value) -> bool {
    GLOBAL_ENGINE.dispatch_equals(a, b)
}

pub fn dispatch_hash(value: &Value) -> u64 {
    GLOBAL_ENGINE.dispatch_hash(value)
}
