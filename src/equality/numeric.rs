//! Numeric comparison in its two call shapes.
//!
//! Operator-style comparison (`numeric_equals`) promotes both operands to
//! the widest common representation and follows IEEE 754, so `NaN` is
//! unequal to itself. Method-style comparison (`method_equals`) converts
//! only the argument, and only when it widens implicitly to the
//! receiver's type; floats then use the total-order convention where
//! `NaN` equals `NaN`. The two shapes disagree, e.g.
//! `method_equals(1.0f32, 1.0f64)` is false while
//! `method_equals(1.0f64, 1.0f32)` is true.

use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;

use crate::types::core_type::CoreType;
use crate::values::core_values::{
    decimal::typed_decimal::TypedDecimal, integer::typed_integer::TypedInteger,
};
use crate::values::value::Value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Boolean(bool),
    Integer(TypedInteger),
    Float(TypedDecimal),
}

impl Number {
    pub fn core_type(&self) -> CoreType {
        match self {
            Number::Boolean(_) => CoreType::Boolean,
            Number::Integer(integer) => integer.core_type(),
            Number::Float(decimal) => decimal.core_type(),
        }
    }

    pub(crate) fn to_f64(self) -> Option<f64> {
        match self {
            Number::Boolean(_) => None,
            Number::Integer(integer) => integer.to_f64(),
            Number::Float(decimal) => Some(decimal.as_f64()),
        }
    }

    /// Integers round through `f64` so that both promotion paths agree.
    pub(crate) fn to_f32(self) -> Option<f32> {
        match self {
            Number::Boolean(_) => None,
            Number::Integer(integer) => integer.to_f64().map(|value| value as f32),
            Number::Float(decimal) => Some(decimal.as_f32()),
        }
    }

    /// Implicit conversion of a method argument to the receiver's type.
    fn widen_to(self, target: CoreType) -> Option<Number> {
        if !self.core_type().widens_to(target) {
            return None;
        }
        Some(match (self, target) {
            (Number::Boolean(_), _) => self,
            (_, CoreType::F32) => Number::Float(TypedDecimal::from(self.to_f32()?)),
            (_, CoreType::F64) => Number::Float(TypedDecimal::from(self.to_f64()?)),
            (Number::Integer(integer), target) => {
                Number::Integer(integer.cast_to(target)?)
            }
            (Number::Float(_), _) => return None,
        })
    }
}

/// Numeric view of a value. Enumerations are not numbers here; they only
/// compare to members of the same enumeration.
pub fn number_of(value: &Value) -> Option<Number> {
    match value {
        Value::Boolean(value) => Some(Number::Boolean(*value)),
        Value::Integer(integer) => Some(Number::Integer(*integer)),
        Value::Decimal(decimal) => Some(Number::Float(*decimal)),
        _ => None,
    }
}

/// Operator-style comparison with width promotion and IEEE semantics.
pub fn numeric_equals(a: &Value, b: &Value) -> bool {
    if let (Value::Enum(a), Value::Enum(b)) = (a, b) {
        return a.ty == b.ty && a.value.logical_eq(&b.value);
    }
    match (number_of(a), number_of(b)) {
        (Some(a), Some(b)) => promoted_equals(a, b),
        _ => false,
    }
}

fn promoted_equals(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Boolean(a), Number::Boolean(b)) => a == b,
        (Number::Boolean(_), _) | (_, Number::Boolean(_)) => false,
        (Number::Integer(a), Number::Integer(b)) => a.logical_eq(&b),
        (a, b) => {
            if a.core_type() == CoreType::F64 || b.core_type() == CoreType::F64 {
                a.to_f64() == b.to_f64()
            } else {
                a.to_f32() == b.to_f32()
            }
        }
    }
}

/// Method-style comparison: `receiver.equals(argument)`.
pub fn method_equals(receiver: &Value, argument: &Value) -> bool {
    if let (Value::Enum(a), Value::Enum(b)) = (receiver, argument) {
        return a.ty == b.ty && a.value.logical_eq(&b.value);
    }
    let (Some(receiver), Some(argument)) = (number_of(receiver), number_of(argument))
    else {
        return false;
    };
    match argument.widen_to(receiver.core_type()) {
        Some(argument) => total_equals(receiver, argument),
        None => false,
    }
}

/// Same-type comparison where `NaN` equals `NaN` and `-0.0` equals `0.0`.
fn total_equals(a: Number, b: Number) -> bool {
    match (a, b) {
        (Number::Boolean(a), Number::Boolean(b)) => a == b,
        (Number::Integer(a), Number::Integer(b)) => a.logical_eq(&b),
        (Number::Float(a), Number::Float(b)) => {
            OrderedFloat(a.as_f64()) == OrderedFloat(b.as_f64())
        }
        _ => false,
    }
}
