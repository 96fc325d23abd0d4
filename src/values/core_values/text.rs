use std::fmt::Display;
use std::sync::Arc;

use crate::equality::hash::hash_one;
use crate::types::definition::CustomEquatable;
use crate::values::value::Value;

/// Immutable, heap allocated text. Clones share the allocation, so two
/// texts can be identical as well as equal.
#[derive(Debug, Clone)]
pub struct Text(Arc<str>);

impl Text {
    pub fn new<S: Into<Arc<str>>>(text: S) -> Self {
        Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Text) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.0) as *const u8 as usize
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.escape_debug())
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Text::new(text)
    }
}

/// Built-in equatable capability of text: ordinal comparison of the content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEquatable;

impl CustomEquatable for TextEquatable {
    fn equals(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Text(a), Value::Text(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }

    fn hash(&self, value: &Value) -> u64 {
        match value {
            Value::Text(text) => hash_one(text.as_str()),
            _ => hash_one(&()),
        }
    }
}
