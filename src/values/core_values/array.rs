use std::fmt::{self, Display};
use std::sync::Arc;

use crate::types::type_key::TypeKey;
use crate::values::value::Value;

#[derive(Debug)]
pub struct ArrayData {
    pub element_type: TypeKey,
    pub elements: Vec<Value>,
}

/// Heap allocated array with a declared element type. Clones share the
/// allocation.
#[derive(Debug, Clone)]
pub struct Array(Arc<ArrayData>);

impl Array {
    pub fn new<T: Into<TypeKey>>(element_type: T, elements: Vec<Value>) -> Self {
        Array(Arc::new(ArrayData {
            element_type: element_type.into(),
            elements,
        }))
    }

    /// Array of `any`, for heterogeneous elements.
    pub fn mixed(elements: Vec<Value>) -> Self {
        Array::new(TypeKey::Any, elements)
    }

    pub fn element_type(&self) -> &TypeKey {
        &self.0.element_type
    }

    pub fn elements(&self) -> &[Value] {
        &self.0.elements
    }

    pub fn len(&self) -> usize {
        self.0.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.elements.is_empty()
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.elements().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
