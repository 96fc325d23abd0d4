use serde::{Deserialize, Serialize};
use strum::Display;

/// Built-in primitive types known to the engine without registration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CoreType {
    Boolean,

    I8,
    I16,
    I32,
    I64,
    I128,

    U8,
    U16,
    U32,
    U64,
    U128,

    F32,
    F64,

    Text,
}

impl CoreType {
    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(
            self,
            CoreType::I8
                | CoreType::I16
                | CoreType::I32
                | CoreType::I64
                | CoreType::I128
        )
    }

    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            CoreType::U8
                | CoreType::U16
                | CoreType::U32
                | CoreType::U64
                | CoreType::U128
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, CoreType::F32 | CoreType::F64)
    }

    /// Fixed-width numeric types, including booleans.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CoreType::Text)
    }

    /// Size of the inline representation in bytes, `None` for types that
    /// live behind a reference.
    pub fn size(&self) -> Option<usize> {
        Some(match self {
            CoreType::Boolean | CoreType::I8 | CoreType::U8 => 1,
            CoreType::I16 | CoreType::U16 => 2,
            CoreType::I32 | CoreType::U32 | CoreType::F32 => 4,
            CoreType::I64 | CoreType::U64 | CoreType::F64 => 8,
            CoreType::I128 | CoreType::U128 => 16,
            CoreType::Text => return None,
        })
    }

    /// Whether a value of this type converts implicitly to `target` when
    /// passed as the argument of a method-style comparison.
    pub fn widens_to(&self, target: CoreType) -> bool {
        use CoreType::*;
        if *self == target {
            return true;
        }
        match self {
            I8 => matches!(target, I16 | I32 | I64 | F32 | F64),
            U8 => matches!(target, I16 | U16 | I32 | U32 | I64 | U64 | F32 | F64),
            I16 => matches!(target, I32 | I64 | F32 | F64),
            U16 => matches!(target, I32 | U32 | I64 | U64 | F32 | F64),
            I32 => matches!(target, I64 | F32 | F64),
            U32 => matches!(target, I64 | U64 | F32 | F64),
            I64 | U64 => matches!(target, F32 | F64),
            F32 => matches!(target, F64),
            I128 | U128 | F64 | Boolean | Text => false,
        }
    }
}
