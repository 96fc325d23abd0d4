use std::sync::Arc;
use std::thread;

use equality_core::{
    EqualityEngine, EqualityStrategy,
    types::{
        core_type::CoreType,
        definition::{FieldDescriptor, TypeDefinition},
        registry::TypeRegistry,
        type_key::TypeKey,
    },
    values::core_values::structure::Struct,
};
use ntest_timeout::timeout;
use parking_lot::RwLock;

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::default();
    registry
        .insert(TypeDefinition::structure(
            "cache:reading",
            vec![
                FieldDescriptor::new("sensor", CoreType::Text),
                FieldDescriptor::new("value", CoreType::F64),
            ],
        ))
        .unwrap();
    registry
}

#[test]
fn classification_runs_once_per_type() {
    let engine = EqualityEngine::with_registry(registry());
    let key = TypeKey::from(CoreType::I16);
    let first = engine.strategy_for(&key);
    assert_eq!(engine.cache().classifications(), 1);
    for _ in 0..100 {
        assert!(Arc::ptr_eq(&first, &engine.strategy_for(&key)));
        assert!(engine.value_equals(&5i16.into(), &5i16.into()));
        engine.hash_of(&5i16.into());
    }
    assert_eq!(engine.cache().classifications(), 1);
}

#[test]
fn nested_types_are_classified_once_each() {
    let engine = EqualityEngine::with_registry(registry());
    let reading = TypeKey::named("cache:reading");
    engine.strategy_for(&reading);
    // the struct, its text field and its f64 field
    assert_eq!(engine.cache().classifications(), 3);
    engine.strategy_for(&CoreType::Text.into());
    engine.strategy_for(&CoreType::F64.into());
    engine.strategy_for(&reading);
    assert_eq!(engine.cache().classifications(), 3);
    assert_eq!(engine.cache().len(), 3);
}

#[test]
#[timeout(10000)]
fn concurrent_first_resolution_settles_once() {
    let engine = Arc::new(EqualityEngine::with_registry(registry()));
    let key = TypeKey::named("cache:reading");
    let strategies: Vec<Arc<EqualityStrategy>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| engine.strategy_for(&key)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    for strategy in &strategies {
        assert!(Arc::ptr_eq(strategy, &strategies[0]));
    }
    assert!(Arc::ptr_eq(
        &strategies[0],
        &engine.cache().cached(&key).unwrap()
    ));
    let classifications = engine.cache().classifications();
    assert!((3..=24).contains(&classifications));
}

#[test]
#[timeout(10000)]
fn concurrent_comparisons() {
    let engine = Arc::new(EqualityEngine::with_registry(registry()));
    thread::scope(|scope| {
        for index in 0..8 {
            let engine = engine.clone();
            scope.spawn(move || {
                let a = Struct::new("cache:reading", vec!["t".into(), (index as f64).into()]);
                let b = Struct::new("cache:reading", vec!["t".into(), (index as f64).into()]);
                for _ in 0..100 {
                    assert!(engine.value_equals(&a.clone().into(), &b.clone().into()));
                }
            });
        }
    });
}

#[test]
fn registry_shared_with_engine() {
    let types = Arc::new(RwLock::new(TypeRegistry::default()));
    let engine = EqualityEngine::new(types.clone());
    let key = TypeKey::named("cache:late");
    types
        .write()
        .insert(TypeDefinition::enumeration("cache:late", CoreType::U32))
        .unwrap();
    assert!(matches!(
        *engine.strategy_for(&key),
        EqualityStrategy::NumericPromoted(_)
    ));
}
