use std::fmt::{self, Display};

use crate::types::type_key::TypeKey;
use crate::values::value::Value;

/// Fixed arity sequence stored inline. Tuples have no identity.
#[derive(Clone, Debug, Default)]
pub struct Tuple {
    pub elements: Vec<Value>,
}

impl Tuple {
    pub fn new(elements: Vec<Value>) -> Self {
        Tuple { elements }
    }

    pub fn arity(&self) -> usize {
        self.elements.len()
    }

    /// The concrete type is built from the concrete element types; absent
    /// elements contribute `any`.
    pub fn type_key(&self) -> TypeKey {
        TypeKey::Tuple(
            self.elements
                .iter()
                .map(|element| element.type_key().unwrap_or(TypeKey::Any))
                .collect(),
        )
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for Tuple
where
    T: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tuple::new(iter.into_iter().map(Into::into).collect())
    }
}
