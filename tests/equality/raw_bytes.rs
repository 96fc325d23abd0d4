use equality_core::{
    EqualityStrategy, hash_of,
    equality::facade::global_engine,
    types::type_key::TypeKey,
    value_equals,
};

use crate::equality::fixtures::{self, color, pixel, point, sample};

#[test]
fn packed_structs_use_raw_bytes() {
    fixtures::init();
    assert_eq!(
        *global_engine().strategy_for(&TypeKey::named("fixture:pixel")),
        EqualityStrategy::RawBytes { extent: 4 }
    );
    assert_eq!(
        *global_engine().strategy_for(&TypeKey::named("fixture:point")),
        EqualityStrategy::RawBytes { extent: 8 }
    );
    assert_eq!(
        *global_engine().strategy_for(&TypeKey::named("fixture:color")),
        EqualityStrategy::RawBytes { extent: 1 }
    );
}

#[test]
fn independent_instances_with_same_fields_are_equal() {
    fixtures::init();
    let a = pixel(10, 20, 30, 255);
    let b = pixel(10, 20, 30, 255);
    assert!(value_equals(&a, &b));
    assert_eq!(hash_of(&a), hash_of(&b));
    assert!(value_equals(&point(-7, 7), &point(-7, 7)));
    assert!(value_equals(&color(9), &color(9)));
}

#[test]
fn one_changed_byte_makes_them_unequal() {
    fixtures::init();
    let a = pixel(10, 20, 30, 255);
    assert!(!value_equals(&a, &pixel(10, 20, 31, 255)));
    assert!(!value_equals(&a, &pixel(11, 20, 30, 255)));
    assert!(!value_equals(&point(1, 256), &point(1, 257)));
    assert!(!value_equals(&color(1), &color(0)));
}

#[test]
fn float_fields_compare_bitwise() {
    fixtures::init();
    assert!(value_equals(&sample(f32::NAN, 1.0), &sample(f32::NAN, 1.0)));
    assert!(!value_equals(&sample(0.0, 1.0), &sample(-0.0, 1.0)));
}
