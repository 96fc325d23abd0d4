use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::equality::{
    comparator::declared_equals, engine::EqualityEngine, facade,
    hash::declared_hash, strategy::EqualityStrategy,
};
use crate::types::type_key::TypeKey;
use crate::values::{traits::identity::Identity, value::Value};

/// Comparison and hashing with the strategy of one type resolved up front.
/// Values of other concrete types are handed back to the engine.
pub struct Dispatcher<'e> {
    engine: &'e EqualityEngine,
    key: TypeKey,
    strategy: Arc<EqualityStrategy>,
}

impl<'e> Dispatcher<'e> {
    pub(crate) fn new(
        engine: &'e EqualityEngine,
        key: TypeKey,
        strategy: Arc<EqualityStrategy>,
    ) -> Self {
        Dispatcher {
            engine,
            key,
            strategy,
        }
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn strategy(&self) -> &EqualityStrategy {
        &self.strategy
    }

    pub fn equals(&self, a: &Value, b: &Value) -> bool {
        a.identical(b)
            || declared_equals(self.engine, &self.key, &self.strategy, a, b)
    }

    pub fn hash(&self, value: &Value) -> u64 {
        declared_hash(self.engine, &self.key, &self.strategy, value)
    }
}

/// Wraps a value so that std and indexmap collections key on it with
/// `dispatch_equals` and `dispatch_hash` of the global engine.
#[derive(Debug, Clone, Default)]
pub struct DispatchKey(pub Value);

impl DispatchKey {
    pub fn new<T: Into<Value>>(value: T) -> Self {
        DispatchKey(value.into())
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl PartialEq for DispatchKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.identical(&other.0) || facade::dispatch_equals(&self.0, &other.0)
    }
}

impl Eq for DispatchKey {}

impl Hash for DispatchKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(facade::dispatch_hash(&self.0));
    }
}

impl From<Value> for DispatchKey {
    fn from(value: Value) -> Self {
        DispatchKey(value)
    }
}
