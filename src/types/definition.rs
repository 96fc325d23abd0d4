use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{core_type::CoreType, path::TypePath, type_key::TypeKey};
use crate::values::value::Value;

/// Optional capability a type can declare to take over its own
/// comparison. Both operands passed to `equals` are of the declaring type.
pub trait CustomEquatable: Send + Sync {
    fn equals(&self, a: &Value, b: &Value) -> bool;

    /// Must agree with `equals`: equal values produce equal hashes.
    fn hash(&self, value: &Value) -> u64;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeKey,
}

impl FieldDescriptor {
    pub fn new<N: Into<String>, T: Into<TypeKey>>(name: N, ty: T) -> Self {
        FieldDescriptor {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Flat value type without independent identity.
    Struct(Vec<FieldDescriptor>),
    /// Heap allocated type with independent identity.
    Class(Vec<FieldDescriptor>),
    /// Enumeration over an integer type.
    Enum(CoreType),
    /// A type the host cannot describe any further.
    Opaque,
}

#[derive(Clone)]
pub struct TypeDefinition {
    pub name: TypePath,
    pub declaration: Declaration,
    pub equatable: Option<Arc<dyn CustomEquatable>>,
}

impl TypeDefinition {
    pub fn new<P: Into<TypePath>>(name: P, declaration: Declaration) -> Self {
        TypeDefinition {
            name: name.into(),
            declaration,
            equatable: None,
        }
    }

    pub fn structure<P: Into<TypePath>>(
        name: P,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        TypeDefinition::new(name, Declaration::Struct(fields))
    }

    pub fn class<P: Into<TypePath>>(
        name: P,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        TypeDefinition::new(name, Declaration::Class(fields))
    }

    pub fn enumeration<P: Into<TypePath>>(name: P, underlying: CoreType) -> Self {
        TypeDefinition::new(name, Declaration::Enum(underlying))
    }

    pub fn opaque<P: Into<TypePath>>(name: P) -> Self {
        TypeDefinition::new(name, Declaration::Opaque)
    }

    pub fn with_equatable<E: CustomEquatable + 'static>(
        mut self,
        equatable: E,
    ) -> Self {
        self.equatable = Some(Arc::new(equatable));
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        match &self.declaration {
            Declaration::Struct(fields) | Declaration::Class(fields) => fields,
            Declaration::Enum(_) | Declaration::Opaque => &[],
        }
    }
}

impl Debug for TypeDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDefinition")
            .field("name", &self.name)
            .field("declaration", &self.declaration)
            .field("equatable", &self.equatable.is_some())
            .finish()
    }
}
