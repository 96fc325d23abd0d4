use thiserror::Error;

use crate::types::{path::TypePath, type_key::TypeKey};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeRegistryError {
    #[error("Type {0} is already registered")]
    TypeAlreadyExists(TypePath),
    #[error("Type {0} not found")]
    TypeNotFound(TypePath),
}

/// Reasons a type could not be bound to a comparison strategy. These are
/// recorded once per type and never surface from comparison calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Type {0} is not registered")]
    UnknownType(TypePath),
    #[error("Type {0} cannot be classified")]
    Unclassifiable(TypeKey),
    #[error("Value layout of {0} embeds itself")]
    CyclicLayout(TypeKey),
}
