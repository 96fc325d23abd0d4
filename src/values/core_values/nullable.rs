use std::fmt::{self, Display};

use crate::types::type_key::TypeKey;
use crate::values::value::Value;

/// Value of a nullable wrapper type `inner?`.
#[derive(Debug, Clone)]
pub struct Nullable {
    pub inner: TypeKey,
    pub value: Option<Box<Value>>,
}

impl Nullable {
    pub fn some<T: Into<TypeKey>, V: Into<Value>>(inner: T, value: V) -> Self {
        Nullable {
            inner: inner.into(),
            value: Some(Box::new(value.into())),
        }
    }

    pub fn none<T: Into<TypeKey>>(inner: T) -> Self {
        Nullable {
            inner: inner.into(),
            value: None,
        }
    }

    pub fn get(&self) -> Option<&Value> {
        self.value.as_deref()
    }
}

impl Display for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "null"),
        }
    }
}
