use std::fmt::Display;
use std::hash::Hash;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::core_type::CoreType;

/// Fixed-width integer value. Equality through `PartialEq` is strict
/// (same width, same value); use `logical_eq` to compare across widths.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Copy, Serialize, Deserialize)]
pub enum TypedInteger {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
}

impl TypedInteger {
    pub fn core_type(&self) -> CoreType {
        match self {
            TypedInteger::I8(_) => CoreType::I8,
            TypedInteger::I16(_) => CoreType::I16,
            TypedInteger::I32(_) => CoreType::I32,
            TypedInteger::I64(_) => CoreType::I64,
            TypedInteger::I128(_) => CoreType::I128,
            TypedInteger::U8(_) => CoreType::U8,
            TypedInteger::U16(_) => CoreType::U16,
            TypedInteger::U32(_) => CoreType::U32,
            TypedInteger::U64(_) => CoreType::U64,
            TypedInteger::U128(_) => CoreType::U128,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            TypedInteger::I8(_)
                | TypedInteger::I16(_)
                | TypedInteger::I32(_)
                | TypedInteger::I64(_)
                | TypedInteger::I128(_)
        )
    }

    pub fn is_unsigned(&self) -> bool {
        !self.is_signed()
    }

    /// Compares the mathematical values, ignoring width and signedness.
    pub fn logical_eq(&self, other: &Self) -> bool {
        if self.is_unsigned() && other.is_unsigned() {
            self.to_u128() == other.to_u128()
        } else {
            self.to_i128() == other.to_i128()
        }
    }

    /// Converts to `target` if the value is representable there.
    pub fn cast_to(&self, target: CoreType) -> Option<TypedInteger> {
        Some(match target {
            CoreType::I8 => TypedInteger::I8(self.to_i8()?),
            CoreType::I16 => TypedInteger::I16(self.to_i16()?),
            CoreType::I32 => TypedInteger::I32(self.to_i32()?),
            CoreType::I64 => TypedInteger::I64(self.to_i64()?),
            CoreType::I128 => TypedInteger::I128(self.to_i128()?),
            CoreType::U8 => TypedInteger::U8(self.to_u8()?),
            CoreType::U16 => TypedInteger::U16(self.to_u16()?),
            CoreType::U32 => TypedInteger::U32(self.to_u32()?),
            CoreType::U64 => TypedInteger::U64(self.to_u64()?),
            CoreType::U128 => TypedInteger::U128(self.to_u128()?),
            CoreType::Boolean | CoreType::F32 | CoreType::F64 | CoreType::Text => {
                return None;
            }
        })
    }

    /// Appends the little-endian in-memory representation.
    pub fn write_le_bytes(&self, out: &mut Vec<u8>) {
        match self {
            TypedInteger::I8(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::I16(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::I32(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::I64(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::I128(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::U8(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::U16(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::U32(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::U64(v) => out.extend_from_slice(&v.to_le_bytes()),
            TypedInteger::U128(v) => out.extend_from_slice(&v.to_le_bytes()),
        }
    }
}

impl ToPrimitive for TypedInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128()?.to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        match self {
            TypedInteger::I8(v) => Some(*v as i128),
            TypedInteger::I16(v) => Some(*v as i128),
            TypedInteger::I32(v) => Some(*v as i128),
            TypedInteger::I64(v) => Some(*v as i128),
            TypedInteger::I128(v) => Some(*v),
            TypedInteger::U8(v) => Some(*v as i128),
            TypedInteger::U16(v) => Some(*v as i128),
            TypedInteger::U32(v) => Some(*v as i128),
            TypedInteger::U64(v) => Some(*v as i128),
            TypedInteger::U128(v) => i128::try_from(*v).ok(),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        match self {
            TypedInteger::U8(v) => Some(*v as u128),
            TypedInteger::U16(v) => Some(*v as u128),
            TypedInteger::U32(v) => Some(*v as u128),
            TypedInteger::U64(v) => Some(*v as u128),
            TypedInteger::U128(v) => Some(*v),
            signed => u128::try_from(signed.to_i128()?).ok(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(match self {
            TypedInteger::U128(v) => *v as f64,
            other => other.to_i128()? as f64,
        })
    }

    fn to_f32(&self) -> Option<f32> {
        Some(match self {
            TypedInteger::U128(v) => *v as f32,
            other => other.to_i128()? as f32,
        })
    }
}

impl Display for TypedInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TypedInteger::I8(v) => write!(f, "{v}i8"),
            TypedInteger::I16(v) => write!(f, "{v}i16"),
            TypedInteger::I32(v) => write!(f, "{v}i32"),
            TypedInteger::I64(v) => write!(f, "{v}i64"),
            TypedInteger::I128(v) => write!(f, "{v}i128"),
            TypedInteger::U8(v) => write!(f, "{v}u8"),
            TypedInteger::U16(v) => write!(f, "{v}u16"),
            TypedInteger::U32(v) => write!(f, "{v}u32"),
            TypedInteger::U64(v) => write!(f, "{v}u64"),
            TypedInteger::U128(v) => write!(f, "{v}u128"),
        }
    }
}

macro_rules! typed_integer_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for TypedInteger {
                fn from(v: $ty) -> Self {
                    TypedInteger::$variant(v)
                }
            }
        )*
    };
}

typed_integer_from!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
);
