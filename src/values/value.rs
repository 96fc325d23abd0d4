use std::fmt::Display;

use equality_macros::FromVariants;

use crate::types::{core_type::CoreType, type_key::TypeKey};
use crate::values::core_values::{
    array::Array, decimal::typed_decimal::TypedDecimal,
    enumeration::Enumeration, integer::typed_integer::TypedInteger,
    nullable::Nullable, object::Object, structure::Struct, text::Text,
    tuple::Tuple,
};

/// A runtime value, paired implicitly with its concrete type through
/// `type_key`.
#[derive(Debug, Clone, Default, FromVariants)]
pub enum Value {
    /// The absent value. It has no type of its own.
    #[default]
    Null,
    Boolean(bool),
    Integer(TypedInteger),
    Decimal(TypedDecimal),
    Text(Text),
    Enum(Enumeration),
    Nullable(Nullable),
    Struct(Struct),
    Object(Object),
    Array(Array),
    Tuple(Tuple),
}

impl Value {
    /// Concrete runtime type of the value, `None` for `Null`.
    pub fn type_key(&self) -> Option<TypeKey> {
        Some(match self {
            Value::Null => return None,
            Value::Boolean(_) => TypeKey::Core(CoreType::Boolean),
            Value::Integer(integer) => TypeKey::Core(integer.core_type()),
            Value::Decimal(decimal) => TypeKey::Core(decimal.core_type()),
            Value::Text(_) => TypeKey::Core(CoreType::Text),
            Value::Enum(enumeration) => TypeKey::Named(enumeration.ty.clone()),
            Value::Nullable(nullable) => {
                TypeKey::Nullable(Box::new(nullable.inner.clone()))
            }
            Value::Struct(structure) => TypeKey::Named(structure.ty.clone()),
            Value::Object(object) => TypeKey::Named(object.ty().clone()),
            Value::Array(array) => {
                TypeKey::Array(Box::new(array.element_type().clone()))
            }
            Value::Tuple(tuple) => tuple.type_key(),
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `Null`, or a nullable wrapper holding nothing.
    pub fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Nullable(nullable) => nullable.get().is_none(),
            _ => false,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Tuple(_))
    }

    /// Elements of an array or tuple.
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Value::Array(array) => Some(array.elements()),
            Value::Tuple(tuple) => Some(&tuple.elements),
            _ => None,
        }
    }

    /// Allocation address of identity-bearing values.
    pub(crate) fn address(&self) -> Option<usize> {
        match self {
            Value::Text(text) => Some(text.address()),
            Value::Object(object) => Some(object.address()),
            Value::Array(array) => Some(array.address()),
            _ => None,
        }
    }

    /// Appends the logical field bytes of inline data, little-endian and in
    /// declaration order. Returns `false` if the value holds anything that
    /// has no inline byte representation.
    pub fn write_raw_bytes(&self, out: &mut Vec<u8>) -> bool {
        match self {
            Value::Boolean(value) => {
                out.push(*value as u8);
                true
            }
            Value::Integer(integer) => {
                integer.write_le_bytes(out);
                true
            }
            Value::Decimal(decimal) => {
                decimal.write_le_bytes(out);
                true
            }
            Value::Enum(enumeration) => {
                enumeration.value.write_le_bytes(out);
                true
            }
            Value::Struct(structure) => {
                structure.fields.iter().all(|field| field.write_raw_bytes(out))
            }
            _ => false,
        }
    }

    pub fn raw_bytes(&self) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_raw_bytes(&mut bytes).then_some(bytes)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Decimal(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
            Value::Enum(value) => write!(f, "{value}"),
            Value::Nullable(value) => write!(f, "{value}"),
            Value::Struct(value) => write!(f, "{value}"),
            Value::Object(value) => write!(f, "{value}"),
            Value::Array(value) => write!(f, "{value}"),
            Value::Tuple(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! value_from_primitive {
    ($variant:ident => $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

value_from_primitive!(Integer => i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
value_from_primitive!(Decimal => f32, f64);
value_from_primitive!(Text => &str, String);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}
