use std::fmt::{self, Display};
use std::sync::Arc;

use crate::types::path::TypePath;
use crate::values::value::Value;

#[derive(Debug)]
pub struct ObjectData {
    pub ty: TypePath,
    pub fields: Vec<Value>,
}

/// Instance of an identity-bearing (class) type. Clones share the
/// allocation.
#[derive(Debug, Clone)]
pub struct Object(Arc<ObjectData>);

impl Object {
    pub fn new<P: Into<TypePath>>(ty: P, fields: Vec<Value>) -> Self {
        Object(Arc::new(ObjectData {
            ty: ty.into(),
            fields,
        }))
    }

    pub fn ty(&self) -> &TypePath {
        &self.0.ty
    }

    pub fn fields(&self) -> &[Value] {
        &self.0.fields
    }

    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "&{} {{", self.ty())?;
        for (i, value) in self.fields().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
