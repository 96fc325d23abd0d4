use std::sync::Arc;

use crate::equality::{
    cache::StrategyCache,
    comparator::strategy_equals,
    dispatch::Dispatcher,
    hash::{NULL_HASH, strategy_hash, structural_hash},
    strategy::EqualityStrategy,
    structural::{ElementComparer, ValueComparer, structural_equals},
};
use crate::types::{
    descriptor::TypeDescriptor,
    error::ResolutionError,
    registry::{TypeIntrospection, TypeRegistry},
    type_key::TypeKey,
};
use crate::values::{traits::identity::Identity, value::Value};

/// A type metadata source together with the strategies resolved against
/// it. Engines are independent of each other; the free functions in
/// `facade` use a process-wide one.
pub struct EqualityEngine {
    types: Arc<dyn TypeIntrospection>,
    cache: StrategyCache,
}

impl Default for EqualityEngine {
    fn default() -> Self {
        EqualityEngine::with_registry(TypeRegistry::default())
    }
}

impl EqualityEngine {
    pub fn new(types: Arc<dyn TypeIntrospection>) -> Self {
        EqualityEngine {
            types,
            cache: StrategyCache::new(),
        }
    }

    pub fn with_registry(registry: TypeRegistry) -> Self {
        EqualityEngine::new(Arc::new(registry))
    }

    pub fn types(&self) -> &dyn TypeIntrospection {
        self.types.as_ref()
    }

    pub fn cache(&self) -> &StrategyCache {
        &self.cache
    }

    pub fn describe(
        &self,
        key: &TypeKey,
    ) -> Result<Arc<TypeDescriptor>, ResolutionError> {
        self.cache.describe(key, self.types())
    }

    /// Descriptor of the concrete type of `value`, `None` for `Null`.
    pub fn describe_value(
        &self,
        value: &Value,
    ) -> Option<Result<Arc<TypeDescriptor>, ResolutionError>> {
        value.type_key().map(|key| self.describe(&key))
    }

    pub fn strategy_for(&self, key: &TypeKey) -> Arc<EqualityStrategy> {
        self.cache.resolve(key, self.types())
    }

    /// Same allocation, or both absent.
    pub fn identity_equals(&self, a: &Value, b: &Value) -> bool {
        a.identical(b)
    }

    /// Content equality under the strategy of the operands' concrete type.
    /// Operands of different concrete types are never equal.
    pub fn value_equals(&self, a: &Value, b: &Value) -> bool {
        a.identical(b) || self.dispatch_equals(a, b)
    }

    /// Element-wise comparison of containers; `value_equals` per element
    /// unless another comparer is given.
    pub fn structural_equals(
        &self,
        a: &Value,
        b: &Value,
        comparer: Option<&dyn ElementComparer>,
    ) -> bool {
        match comparer {
            Some(comparer) => structural_equals(a, b, comparer),
            None => structural_equals(a, b, &ValueComparer::new(self)),
        }
    }

    pub fn structural_hash(
        &self,
        value: &Value,
        comparer: Option<&dyn ElementComparer>,
    ) -> u64 {
        match comparer {
            Some(comparer) => structural_hash(value, comparer),
            None => structural_hash(value, &ValueComparer::new(self)),
        }
    }

    /// Hash consistent with `value_equals`.
    pub fn hash_of(&self, value: &Value) -> u64 {
        self.dispatch_hash(value)
    }

    /// `value_equals` without the identity shortcut, straight to the
    /// cached strategy.
    pub fn dispatch_equals(&self, a: &Value, b: &Value) -> bool {
        match (a.type_key(), b.type_key()) {
            (None, None) => true,
            (Some(a_key), Some(b_key)) if a_key == b_key => {
                strategy_equals(self, &self.strategy_for(&a_key), a, b)
            }
            _ => false,
        }
    }

    pub fn dispatch_hash(&self, value: &Value) -> u64 {
        match value.type_key() {
            Some(key) => strategy_hash(self, &self.strategy_for(&key), value),
            None => NULL_HASH,
        }
    }

    /// Comparison bound to a single type, for code that handles many values
    /// of the same type.
    pub fn dispatcher(&self, key: TypeKey) -> Dispatcher<'_> {
        let strategy = self.strategy_for(&key);
        Dispatcher::new(self, key, strategy)
    }
}
