use std::fmt::{self, Display};

use crate::types::path::TypePath;
use crate::values::core_values::integer::typed_integer::TypedInteger;

/// Member of a registered enumeration, represented by its underlying
/// integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pub ty: TypePath,
    pub value: TypedInteger,
}

impl Enumeration {
    pub fn new<P: Into<TypePath>, V: Into<TypedInteger>>(ty: P, value: V) -> Self {
        Enumeration {
            ty: ty.into(),
            value: value.into(),
        }
    }
}

impl Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.ty, self.value)
    }
}
