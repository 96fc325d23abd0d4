use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::{DashMap, mapref::entry::Entry};
use log::{debug, trace, warn};

use crate::equality::strategy::{EqualityStrategy, FieldStrategy};
use crate::types::{
    descriptor::{TypeDescriptor, TypeKind},
    error::ResolutionError,
    registry::TypeIntrospection,
    type_key::TypeKey,
};

/// Append-only memo of descriptors and strategies per concrete type.
///
/// Entries are never invalidated: registered types are immutable. Two
/// threads racing on the first resolution of a type may both classify it,
/// but the first stored strategy wins and is what every caller observes.
#[derive(Debug, Default)]
pub struct StrategyCache {
    descriptors: DashMap<TypeKey, Arc<TypeDescriptor>>,
    strategies: DashMap<TypeKey, Arc<EqualityStrategy>>,
    failures: DashMap<TypeKey, ResolutionError>,
    classifications: AtomicUsize,
}

impl StrategyCache {
    pub fn new() -> Self {
        StrategyCache::default()
    }

    /// Cached descriptor of `key`. Failed descriptions are not cached here;
    /// the strategy table remembers them instead.
    pub fn describe(
        &self,
        key: &TypeKey,
        types: &dyn TypeIntrospection,
    ) -> Result<Arc<TypeDescriptor>, ResolutionError> {
        if let Some(descriptor) = self.descriptors.get(key) {
            return Ok(descriptor.value().clone());
        }
        let descriptor = Arc::new(TypeDescriptor::describe(key, types)?);
        Ok(self
            .descriptors
            .entry(key.clone())
            .or_insert(descriptor)
            .value()
            .clone())
    }

    /// Strategy bound to `key`, classifying the type on first use. Never
    /// fails: types that cannot be classified are bound to `IdentityOnly`.
    pub fn resolve(
        &self,
        key: &TypeKey,
        types: &dyn TypeIntrospection,
    ) -> Arc<EqualityStrategy> {
        if let Some(strategy) = self.cached(key) {
            return strategy;
        }
        let mut visiting = Vec::new();
        match self.resolve_in(key, types, &mut visiting) {
            Ok(strategy) => strategy,
            Err(err) => self.record_failure(key, err),
        }
    }

    pub fn cached(&self, key: &TypeKey) -> Option<Arc<EqualityStrategy>> {
        self.strategies.get(key).map(|strategy| strategy.value().clone())
    }

    /// Why `key` fell back to `IdentityOnly`, if it did.
    pub fn failure(&self, key: &TypeKey) -> Option<ResolutionError> {
        self.failures.get(key).map(|err| err.value().clone())
    }

    /// Number of times any type was classified.
    pub fn classifications(&self) -> usize {
        self.classifications.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn resolve_in(
        &self,
        key: &TypeKey,
        types: &dyn TypeIntrospection,
        visiting: &mut Vec<TypeKey>,
    ) -> Result<Arc<EqualityStrategy>, ResolutionError> {
        if let Some(strategy) = self.cached(key) {
            return Ok(strategy);
        }
        if visiting.contains(key) {
            return Err(ResolutionError::CyclicLayout(key.clone()));
        }
        visiting.push(key.clone());
        let result = self.classify(key, types, visiting);
        visiting.pop();

        match result {
            Ok(strategy) => Ok(self.settle(key, strategy)),
            // a cycle is owned by the type that closes it
            Err(ResolutionError::CyclicLayout(cycle))
                if &cycle != key && !visiting.is_empty() =>
            {
                Err(ResolutionError::CyclicLayout(cycle))
            }
            Err(err) => Ok(self.record_failure(key, err)),
        }
    }

    fn classify(
        &self,
        key: &TypeKey,
        types: &dyn TypeIntrospection,
        visiting: &mut Vec<TypeKey>,
    ) -> Result<EqualityStrategy, ResolutionError> {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        let described = self.describe(key, types);

        if let Ok(descriptor) = &described {
            if let TypeKind::Numeric(repr) = &descriptor.kind {
                if repr.is_single_byte() {
                    return Ok(EqualityStrategy::RawBytes {
                        extent: repr.width(),
                    });
                }
            }
        }
        if let Some(equatable) = types.custom_equatable(key) {
            return Ok(EqualityStrategy::CustomEquatable(equatable));
        }
        let descriptor = described?;

        let strategy = match &descriptor.kind {
            TypeKind::NullableWrapper(inner) => EqualityStrategy::NullableWrap(
                self.resolve_in(inner, types, visiting)?,
            ),
            TypeKind::Numeric(repr) => EqualityStrategy::NumericPromoted(*repr),
            TypeKind::Container(_) => EqualityStrategy::StructuralContainer,
            TypeKind::ValueLayout(layout) if layout.tightly_packed => {
                EqualityStrategy::RawBytes {
                    extent: layout.size,
                }
            }
            TypeKind::ValueLayout(layout) => {
                let mut fields = Vec::with_capacity(layout.fields.len());
                for field in &layout.fields {
                    fields.push(FieldStrategy {
                        name: field.name.clone(),
                        ty: field.ty.clone(),
                        strategy: self.resolve_in(&field.ty, types, visiting)?,
                    });
                }
                EqualityStrategy::Memberwise(fields)
            }
            TypeKind::IdentityBearing => EqualityStrategy::IdentityOnly,
        };
        debug!(
            "Resolved equality strategy for {key} ({}): {}",
            descriptor.kind,
            strategy.tag()
        );
        Ok(strategy)
    }

    fn settle(
        &self,
        key: &TypeKey,
        strategy: EqualityStrategy,
    ) -> Arc<EqualityStrategy> {
        match self.strategies.entry(key.clone()) {
            Entry::Occupied(entry) => {
                trace!("Equality strategy for {key} was settled by another caller");
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(Arc::new(strategy)).value().clone(),
        }
    }

    fn record_failure(
        &self,
        key: &TypeKey,
        err: ResolutionError,
    ) -> Arc<EqualityStrategy> {
        if let Entry::Vacant(entry) = self.failures.entry(key.clone()) {
            warn!("Falling back to identity comparison for {key}: {err}");
            entry.insert(err);
        }
        self.settle(key, EqualityStrategy::IdentityOnly)
    }
}
