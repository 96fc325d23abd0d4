use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::types::{
    core_type::CoreType,
    definition::{CustomEquatable, Declaration, FieldDescriptor, TypeDefinition},
    error::TypeRegistryError,
    path::TypePath,
    type_key::TypeKey,
};
use crate::values::core_values::text::TextEquatable;

/// Metadata source the strategy resolver classifies types against.
pub trait TypeIntrospection: Send + Sync {
    fn declaration_of(&self, path: &TypePath) -> Option<Declaration>;

    /// Capability probe: returns the type's own comparison if it declares one.
    fn custom_equatable(&self, ty: &TypeKey) -> Option<Arc<dyn CustomEquatable>>;

    fn has_custom_equatable(&self, ty: &TypeKey) -> bool {
        self.custom_equatable(ty).is_some()
    }

    /// Declared fields in declaration order, empty for types without fields.
    fn fields_of(&self, ty: &TypeKey) -> Vec<FieldDescriptor> {
        match ty {
            TypeKey::Named(path) => match self.declaration_of(path) {
                Some(Declaration::Struct(fields))
                | Some(Declaration::Class(fields)) => fields,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Element types if `ty` is a container type.
    fn container_elements(&self, ty: &TypeKey) -> Option<Vec<TypeKey>> {
        match ty {
            TypeKey::Array(element) => Some(vec![(**element).clone()]),
            TypeKey::Tuple(elements) => Some(elements.clone()),
            _ => None,
        }
    }
}

/// Append-only store of user-declared types, in registration order.
/// Definitions are immutable once inserted.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<TypePath, TypeDefinition>,
}

impl TypeRegistry {
    pub fn insert(&mut self, ty: TypeDefinition) -> Result<(), TypeRegistryError> {
        // Check if the type already exists in the registry
        if self.types.contains_key(&ty.name) {
            return Err(TypeRegistryError::TypeAlreadyExists(ty.name.clone()));
        }
        self.types.insert(ty.name.clone(), ty);
        Ok(())
    }

    pub fn get(&self, name: &TypePath) -> Result<&TypeDefinition, TypeRegistryError> {
        self.types
            .get(name)
            .ok_or(TypeRegistryError::TypeNotFound(name.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeIntrospection for TypeRegistry {
    fn declaration_of(&self, path: &TypePath) -> Option<Declaration> {
        self.types.get(path).map(|ty| ty.declaration.clone())
    }

    fn custom_equatable(&self, ty: &TypeKey) -> Option<Arc<dyn CustomEquatable>> {
        match ty {
            TypeKey::Core(CoreType::Text) => Some(Arc::new(TextEquatable)),
            TypeKey::Named(path) => {
                self.types.get(path).and_then(|ty| ty.equatable.clone())
            }
            _ => None,
        }
    }
}

/// Shared registry that can still be extended after engines were built on it.
impl TypeIntrospection for RwLock<TypeRegistry> {
    fn declaration_of(&self, path: &TypePath) -> Option<Declaration> {
        self.read().declaration_of(path)
    }

    fn custom_equatable(&self, ty: &TypeKey) -> Option<Arc<dyn CustomEquatable>> {
        self.read().custom_equatable(ty)
    }
}
