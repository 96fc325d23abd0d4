use crate::equality::{
    engine::EqualityEngine,
    numeric::method_equals,
    strategy::{EqualityStrategy, FieldStrategy},
    structural::{ValueComparer, structural_equals},
};
use crate::types::type_key::TypeKey;
use crate::values::{traits::identity::Identity, value::Value};

/// Applies `strategy` to two values of the type it was resolved for.
pub(crate) fn strategy_equals(
    engine: &EqualityEngine,
    strategy: &EqualityStrategy,
    a: &Value,
    b: &Value,
) -> bool {
    match strategy {
        EqualityStrategy::IdentityOnly => {
            a.identical(b) || (a.is_absent() && b.is_absent())
        }
        // extent is fixed by the type
        EqualityStrategy::RawBytes { .. } => match (a.raw_bytes(), b.raw_bytes()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
        EqualityStrategy::Memberwise(fields) => {
            memberwise_equals(engine, fields, a, b)
        }
        EqualityStrategy::CustomEquatable(equatable) => {
            a.identical(b) || equatable.equals(a, b)
        }
        EqualityStrategy::NullableWrap(inner) => match (a, b) {
            (Value::Nullable(a), Value::Nullable(b)) => {
                match (present(a.get()), present(b.get())) {
                    (None, None) => true,
                    (Some(a_value), Some(b_value)) => {
                        declared_equals(engine, &a.inner, inner, a_value, b_value)
                    }
                    _ => false,
                }
            }
            _ => false,
        },
        EqualityStrategy::NumericPromoted(_) => method_equals(a, b),
        EqualityStrategy::StructuralContainer => {
            structural_equals(a, b, &ValueComparer::new(engine))
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_absent())
}

/// Compares two values stored under a declared type. Two absent values are
/// equal whichever form they take. Values whose concrete type is the
/// declared one use the pre-resolved strategy; any other concrete type is
/// resolved on its own.
pub(crate) fn declared_equals(
    engine: &EqualityEngine,
    declared: &TypeKey,
    strategy: &EqualityStrategy,
    a: &Value,
    b: &Value,
) -> bool {
    match (a.is_absent(), b.is_absent()) {
        (true, true) => return true,
        (false, false) => {}
        _ => return false,
    }
    match (a.type_key(), b.type_key()) {
        (Some(a_key), Some(b_key)) if a_key == b_key => {
            if &a_key == declared {
                strategy_equals(engine, strategy, a, b)
            } else {
                engine.value_equals(a, b)
            }
        }
        _ => false,
    }
}

fn memberwise_equals(
    engine: &EqualityEngine,
    fields: &[FieldStrategy],
    a: &Value,
    b: &Value,
) -> bool {
    let (Value::Struct(a), Value::Struct(b)) = (a, b) else {
        return false;
    };
    if a.fields.len() != fields.len() || b.fields.len() != fields.len() {
        return false;
    }
    fields
        .iter()
        .zip(a.fields.iter().zip(&b.fields))
        .all(|(field, (a_field, b_field))| {
            declared_equals(engine, &field.ty, &field.strategy, a_field, b_field)
        })
}
