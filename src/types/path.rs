use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Namespace used for paths written without an explicit namespace.
pub const DEFAULT_NAMESPACE: &str = "core";

/// Name of a user-declared type, written as `namespace:name[/variant]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypePath {
    pub namespace: String,
    pub name: String,
    pub variant: Option<String>,
}

impl TypePath {
    pub fn new<N: Into<String>, T: Into<String>>(
        namespace: N,
        name: T,
        variant: Option<String>,
    ) -> Self {
        TypePath {
            namespace: namespace.into(),
            name: name.into(),
            variant,
        }
    }

    pub fn parse(s: &str) -> Self {
        // split namespace:type
        let (namespace, rest) = match s.split_once(':') {
            Some((namespace, rest)) => (namespace, rest),
            None => (DEFAULT_NAMESPACE, s),
        };

        // split type/variant
        let (name, variant) = match rest.split_once('/') {
            Some((name, variant)) => (name, Some(variant.to_string())),
            None => (rest, None),
        };

        TypePath::new(namespace, name, variant)
    }

    pub fn as_str(&self) -> String {
        match &self.variant {
            Some(v) => format!("{}:{}/{}", self.namespace, self.name, v),
            None => format!("{}:{}", self.namespace, self.name),
        }
    }
}

impl From<&str> for TypePath {
    fn from(s: &str) -> Self {
        TypePath::parse(s)
    }
}

impl<N: Into<String>, T: Into<String>> From<(N, T)> for TypePath {
    fn from(value: (N, T)) -> Self {
        TypePath::new(value.0, value.1, None)
    }
}

impl Display for TypePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
