use equality_core::{
    NumericComparer, Structural, hash_of, method_equals, numeric_equals,
    structural_equals, value_equals,
    values::{core_values::array::Array, value::Value},
};

#[test]
fn operator_style_is_symmetric_after_promotion() {
    let double = Value::from(1.0f64);
    let float = Value::from(1.0f32);
    assert!(numeric_equals(&double, &float));
    assert!(numeric_equals(&float, &double));
}

#[test]
fn method_style_depends_on_the_receiver() {
    let double = Value::from(1.0f64);
    let float = Value::from(1.0f32);
    assert!(!method_equals(&float, &double));
    assert!(method_equals(&double, &float));
}

#[test]
fn nan_conventions_differ() {
    let nan = Value::from(f64::NAN);
    assert!(!numeric_equals(&nan, &nan));
    assert!(method_equals(&nan, &nan));
    // value equality follows the method-style convention and stays reflexive
    assert!(value_equals(&nan, &Value::from(f64::NAN)));
    assert_eq!(hash_of(&nan), hash_of(&Value::from(-f64::NAN)));
}

#[test]
fn value_equality_does_not_promote() {
    assert!(!value_equals(&1.0f64.into(), &1.0f32.into()));
    assert!(!value_equals(&1i32.into(), &1i64.into()));
    assert!(value_equals(&1i64.into(), &1i64.into()));
}

#[test]
fn numeric_comparer_in_containers() {
    let comparer = Structural(NumericComparer::default());
    let ints = Value::from(Array::new(
        equality_core::types::core_type::CoreType::I32,
        vec![1i32.into(), 2i32.into()],
    ));
    let doubles = Value::from(Array::new(
        equality_core::types::core_type::CoreType::F64,
        vec![1.0f64.into(), 2.0f64.into()],
    ));
    assert!(structural_equals(&ints, &doubles, Some(&comparer)));
    assert!(!structural_equals(&ints, &doubles, None));
}
