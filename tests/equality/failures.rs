use equality_core::{
    EqualityStrategy, hash_of,
    equality::{facade::global_engine, hash::DEFAULT_HASH},
    types::{error::ResolutionError, path::TypePath, type_key::TypeKey},
    value_equals,
    values::{
        core_values::{object::Object, structure::Struct},
        value::Value,
    },
};

use crate::equality::fixtures;

#[test]
fn opaque_types_fall_back_to_identity() {
    fixtures::init();
    let key = TypeKey::named("fixture:blob");
    assert_eq!(*global_engine().strategy_for(&key), EqualityStrategy::IdentityOnly);
    assert_eq!(
        global_engine().cache().failure(&key),
        Some(ResolutionError::Unclassifiable(key.clone()))
    );

    let blob = Value::from(Object::new("fixture:blob", vec![1i32.into()]));
    assert!(value_equals(&blob, &blob.clone()));
    assert!(!value_equals(
        &blob,
        &Object::new("fixture:blob", vec![1i32.into()]).into()
    ));
    assert_eq!(hash_of(&blob), hash_of(&blob.clone()));
}

#[test]
fn unknown_types_never_fail_comparisons() {
    let key = TypeKey::named("failures:unregistered");
    let a = Value::from(Struct::new("failures:unregistered", vec![1i32.into()]));
    let b = Value::from(Struct::new("failures:unregistered", vec![1i32.into()]));
    assert!(!value_equals(&a, &b));
    // value types have no allocation to hash
    assert_eq!(hash_of(&a), DEFAULT_HASH);
    assert_eq!(
        global_engine().cache().failure(&key),
        Some(ResolutionError::UnknownType(TypePath::parse(
            "failures:unregistered"
        )))
    );
}
