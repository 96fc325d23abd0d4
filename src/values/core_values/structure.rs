use std::fmt::{self, Display};

use crate::types::path::TypePath;
use crate::values::value::Value;

/// Instance of a value-layout type: field values in declaration order,
/// without identity.
#[derive(Debug, Clone)]
pub struct Struct {
    pub ty: TypePath,
    pub fields: Vec<Value>,
}

impl Struct {
    pub fn new<P: Into<TypePath>>(ty: P, fields: Vec<Value>) -> Self {
        Struct {
            ty: ty.into(),
            fields,
        }
    }
}

impl Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{", self.ty)?;
        for (i, value) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
