use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::types::{core_type::CoreType, path::TypePath};

/// Identity of a concrete runtime type. This is the key of every
/// per-type cache in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKey {
    /// Declared-only top type (e.g. the element type of a mixed array).
    /// No concrete value has this type.
    Any,
    Core(CoreType),
    Named(TypePath),
    Nullable(Box<TypeKey>),
    Array(Box<TypeKey>),
    Tuple(Vec<TypeKey>),
}

impl TypeKey {
    pub fn named<P: Into<TypePath>>(path: P) -> Self {
        TypeKey::Named(path.into())
    }

    pub fn nullable<T: Into<TypeKey>>(inner: T) -> Self {
        TypeKey::Nullable(Box::new(inner.into()))
    }

    pub fn array<T: Into<TypeKey>>(element: T) -> Self {
        TypeKey::Array(Box::new(element.into()))
    }

    pub fn as_core(&self) -> Option<CoreType> {
        match self {
            TypeKey::Core(core) => Some(*core),
            _ => None,
        }
    }
}

impl From<CoreType> for TypeKey {
    fn from(core: CoreType) -> Self {
        TypeKey::Core(core)
    }
}

impl From<TypePath> for TypeKey {
    fn from(path: TypePath) -> Self {
        TypeKey::Named(path)
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKey::Any => write!(f, "any"),
            TypeKey::Core(core) => write!(f, "{core}"),
            TypeKey::Named(path) => write!(f, "{path}"),
            TypeKey::Nullable(inner) => write!(f, "{inner}?"),
            TypeKey::Array(element) => write!(f, "[{element}]"),
            TypeKey::Tuple(elements) => {
                let elements: Vec<String> =
                    elements.iter().map(|t| t.to_string()).collect();
                write!(f, "({})", elements.join(", "))
            }
        }
    }
}
