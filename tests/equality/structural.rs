use equality_core::{
    ElementComparer, Structural, ValueComparer, assert_structural_eq,
    structural_equals,
    types::{core_type::CoreType, type_key::TypeKey},
    values::{
        core_values::{array::Array, tuple::Tuple},
        value::Value,
    },
};

fn row(values: &[i32]) -> Value {
    Array::new(
        CoreType::I32,
        values.iter().map(|value| Value::from(*value)).collect(),
    )
    .into()
}

fn grid(rows: &[&[i32]]) -> Value {
    Array::new(
        TypeKey::array(CoreType::I32),
        rows.iter().map(|values| row(values)).collect(),
    )
    .into()
}

#[test]
fn nested_arrays() {
    let comparer = Structural(ValueComparer::default());
    let a = grid(&[&[1, 2], &[3]]);
    assert!(structural_equals(&a, &grid(&[&[1, 2], &[3]]), Some(&comparer)));
    assert!(!structural_equals(&a, &grid(&[&[1, 2], &[3, 0]]), Some(&comparer)));
    assert!(structural_equals(&a, &grid(&[&[1, 2], &[3]]), None));
    assert!(!structural_equals(&a, &grid(&[&[1, 2], &[3, 0]]), None));
    assert_structural_eq!(a, grid(&[&[1, 2], &[3]]));
}

#[test]
fn element_order_matters() {
    let comparer = Structural(ValueComparer::default());
    let a = row(&[1, 2, 3]);
    let b = row(&[3, 2, 1]);
    assert!(!structural_equals(&a, &b, Some(&comparer)));
    assert_ne!(comparer.hash(&a), comparer.hash(&b));
}

#[test]
fn arity_mismatch() {
    let short = Value::from(Tuple::new(vec![1i32.into()]));
    let long = Value::from(Tuple::new(vec![1i32.into(), 1i32.into()]));
    assert!(!structural_equals(&short, &long, None));
    assert!(!structural_equals(&row(&[]), &row(&[0]), None));
    assert!(structural_equals(&row(&[]), &row(&[]), None));
}

#[test]
fn comparer_is_used_at_every_depth() {
    struct Parity;

    impl ElementComparer for Parity {
        fn equals(&self, a: &Value, b: &Value) -> bool {
            match (a, b) {
                (Value::Integer(a), Value::Integer(b)) => {
                    a.to_string().len() % 2 == b.to_string().len() % 2
                }
                _ => false,
            }
        }
        fn hash(&self, value: &Value) -> u64 {
            match value {
                Value::Integer(integer) => (integer.to_string().len() % 2) as u64,
                _ => 0,
            }
        }
    }

    let comparer = Structural(Parity);
    // "1i32" and "22i32" differ in parity of their rendering, "1i32" and "3i32" don't
    assert!(structural_equals(
        &grid(&[&[1], &[3]]),
        &grid(&[&[3], &[5]]),
        Some(&comparer)
    ));
    assert!(!structural_equals(
        &grid(&[&[1], &[3]]),
        &grid(&[&[22], &[3]]),
        Some(&comparer)
    ));
}
