use std::fmt::Display;
use std::hash::Hash;

use ordered_float::OrderedFloat;

use crate::types::core_type::CoreType;

/// Fixed-width floating point value.
///
/// `PartialEq` and `Hash` follow the total-order convention of
/// `OrderedFloat`: `NaN` equals `NaN` and `-0.0` equals `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedDecimal {
    F32(OrderedFloat<f32>),
    F64(OrderedFloat<f64>),
}

impl TypedDecimal {
    pub fn core_type(&self) -> CoreType {
        match self {
            TypedDecimal::F32(_) => CoreType::F32,
            TypedDecimal::F64(_) => CoreType::F64,
        }
    }

    pub fn as_f32(&self) -> f32 {
        match self {
            TypedDecimal::F32(value) => value.into_inner(),
            TypedDecimal::F64(value) => value.into_inner() as f32,
        }
    }

    /// Exact for both widths: every `f32` is representable as `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            TypedDecimal::F32(value) => value.into_inner() as f64,
            TypedDecimal::F64(value) => value.into_inner(),
        }
    }

    pub fn write_le_bytes(&self, out: &mut Vec<u8>) {
        match self {
            TypedDecimal::F32(value) => {
                out.extend_from_slice(&value.into_inner().to_le_bytes())
            }
            TypedDecimal::F64(value) => {
                out.extend_from_slice(&value.into_inner().to_le_bytes())
            }
        }
    }
}

impl Display for TypedDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedDecimal::F32(value) => write!(f, "{}f32", value.into_inner()),
            TypedDecimal::F64(value) => write!(f, "{}f64", value.into_inner()),
        }
    }
}

impl From<f32> for TypedDecimal {
    fn from(value: f32) -> Self {
        TypedDecimal::F32(OrderedFloat(value))
    }
}

impl From<f64> for TypedDecimal {
    fn from(value: f64) -> Self {
        TypedDecimal::F64(OrderedFloat(value))
    }
}
