use equality_core::{
    ElementComparer, Structural, ValueComparer, hash_of,
    structural_equals,
    types::core_type::CoreType,
    value_equals,
    values::{
        core_values::{array::Array, nullable::Nullable, text::Text, tuple::Tuple},
        value::Value,
    },
};

use crate::equality::fixtures::{
    self, color, level, money, node, person, pixel, point, sample,
};

/// Values of every strategy kind, with equal values built independently.
fn samples() -> Vec<Value> {
    fixtures::init();
    let shared_node = node();
    let shared_text = Value::from(Text::from("shared"));
    vec![
        Value::Null,
        true.into(),
        false.into(),
        7u8.into(),
        7u8.into(),
        7i8.into(),
        (-3i64).into(),
        (-3i64).into(),
        (-3i32).into(),
        u128::MAX.into(),
        1.5f64.into(),
        1.5f64.into(),
        1.5f32.into(),
        f64::NAN.into(),
        f64::NAN.into(),
        0.0f64.into(),
        (-0.0f64).into(),
        "text".into(),
        "text".into(),
        "other".into(),
        shared_text.clone(),
        shared_text,
        color(2),
        color(2),
        color(3),
        level(-1),
        level(-1),
        point(1, 2),
        point(1, 2),
        point(2, 1),
        pixel(1, 2, 3, 4),
        pixel(1, 2, 3, 4),
        sample(0.5, 1.0),
        sample(0.5, 1.0),
        person("ada", 36, None, point(0, 0)),
        person("ada", 36, None, point(0, 0)),
        person("ada", 36, Some("countess"), point(0, 0)),
        person("ada", 36, Some("countess"), point(0, 0)),
        person("ada", 36, None, point(0, 1)),
        shared_node.clone(),
        shared_node,
        node(),
        money(100, "EUR"),
        money(100, "EUR"),
        money(100, "USD"),
        Nullable::some(CoreType::I32, 5i32).into(),
        Nullable::some(CoreType::I32, 5i32).into(),
        Nullable::none(CoreType::I32).into(),
        Nullable::none(CoreType::I32).into(),
        Array::new(CoreType::I32, vec![1i32.into(), 2i32.into()]).into(),
        Array::new(CoreType::I32, vec![1i32.into(), 2i32.into()]).into(),
        Array::new(CoreType::I32, vec![2i32.into(), 1i32.into()]).into(),
        Array::mixed(vec!["a".into(), 1i32.into(), Value::Null]).into(),
        Array::mixed(vec!["a".into(), 1i32.into(), Value::Null]).into(),
        Tuple::new(vec![1i32.into(), "a".into()]).into(),
        Tuple::new(vec![1i32.into(), "a".into()]).into(),
        Tuple::new(vec![Value::Null, "a".into()]).into(),
    ]
}

fn check_laws(
    samples: &[Value],
    equals: impl Fn(&Value, &Value) -> bool,
    hash: impl Fn(&Value) -> u64,
) {
    for a in samples {
        assert!(equals(a, a), "not reflexive: {a}");
        assert!(equals(a, &a.clone()), "not reflexive for clones: {a}");
        for b in samples {
            let ab = equals(a, b);
            assert_eq!(ab, equals(b, a), "not symmetric: {a} / {b}");
            if ab {
                assert_eq!(hash(a), hash(b), "hash differs: {a} / {b}");
                for c in samples {
                    if equals(b, c) {
                        assert!(equals(a, c), "not transitive: {a} / {b} / {c}");
                    }
                }
            }
        }
    }
}

#[test]
fn value_equality_laws() {
    check_laws(&samples(), value_equals, hash_of);
}

#[test]
fn structural_equality_laws() {
    let comparer = Structural(ValueComparer::default());
    check_laws(
        &samples(),
        |a, b| structural_equals(a, b, Some(&comparer)),
        |value| comparer.hash(value),
    );
}

#[test]
fn expected_equalities() {
    fixtures::init();
    assert!(value_equals(&point(1, 2), &point(1, 2)));
    assert!(value_equals(&money(100, "EUR"), &money(100, "EUR")));
    assert!(value_equals(&f64::NAN.into(), &f64::NAN.into()));
    assert!(value_equals(&0.0f64.into(), &(-0.0f64).into()));
    assert!(!value_equals(&node(), &node()));
    assert!(!value_equals(&7u8.into(), &7i8.into()));
    assert!(!value_equals(&1.5f64.into(), &1.5f32.into()));
    assert!(!value_equals(&color(2), &2u8.into()));
    assert!(!value_equals(
        &person("ada", 36, None, point(0, 0)),
        &person("ada", 36, Some("countess"), point(0, 0))
    ));
}
