use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use strum::{Display, EnumDiscriminants};

use crate::types::{
    definition::CustomEquatable, descriptor::NumericRepr, type_key::TypeKey,
};

/// Comparison and hash algorithm bound to one concrete type.
#[derive(Clone, EnumDiscriminants)]
#[strum_discriminants(name(StrategyTag), derive(Display, Hash))]
pub enum EqualityStrategy {
    /// Same allocation, or both absent.
    IdentityOnly,
    /// Byte-wise comparison of the logical field bytes.
    RawBytes { extent: usize },
    /// Field by field, in declaration order.
    Memberwise(Vec<FieldStrategy>),
    /// The type's own declared comparison.
    CustomEquatable(Arc<dyn CustomEquatable>),
    NullableWrap(Arc<EqualityStrategy>),
    NumericPromoted(NumericRepr),
    /// Element-wise comparison of arrays and tuples.
    StructuralContainer,
}

/// Strategy of one field, resolved against its declared type. Field values
/// whose concrete type differs from the declared one are resolved on their
/// own.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStrategy {
    pub name: String,
    pub ty: TypeKey,
    pub strategy: Arc<EqualityStrategy>,
}

impl EqualityStrategy {
    pub fn tag(&self) -> StrategyTag {
        StrategyTag::from(self)
    }
}

impl Debug for EqualityStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EqualityStrategy::IdentityOnly => write!(f, "IdentityOnly"),
            EqualityStrategy::RawBytes { extent } => {
                f.debug_struct("RawBytes").field("extent", extent).finish()
            }
            EqualityStrategy::Memberwise(fields) => {
                f.debug_tuple("Memberwise").field(fields).finish()
            }
            EqualityStrategy::CustomEquatable(_) => write!(f, "CustomEquatable"),
            EqualityStrategy::NullableWrap(inner) => {
                f.debug_tuple("NullableWrap").field(inner).finish()
            }
            EqualityStrategy::NumericPromoted(repr) => {
                f.debug_tuple("NumericPromoted").field(repr).finish()
            }
            EqualityStrategy::StructuralContainer => {
                write!(f, "StructuralContainer")
            }
        }
    }
}

/// Strategies are equivalent if they run the same algorithm; custom
/// capabilities compare by allocation.
impl PartialEq for EqualityStrategy {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EqualityStrategy::IdentityOnly, EqualityStrategy::IdentityOnly)
            | (
                EqualityStrategy::StructuralContainer,
                EqualityStrategy::StructuralContainer,
            ) => true,
            (
                EqualityStrategy::RawBytes { extent: a },
                EqualityStrategy::RawBytes { extent: b },
            ) => a == b,
            (
                EqualityStrategy::Memberwise(a),
                EqualityStrategy::Memberwise(b),
            ) => a == b,
            (
                EqualityStrategy::CustomEquatable(a),
                EqualityStrategy::CustomEquatable(b),
            ) => Arc::ptr_eq(a, b),
            (
                EqualityStrategy::NullableWrap(a),
                EqualityStrategy::NullableWrap(b),
            ) => a == b,
            (
                EqualityStrategy::NumericPromoted(a),
                EqualityStrategy::NumericPromoted(b),
            ) => a == b,
            _ => false,
        }
    }
}
