use serde::Serialize;
use strum::Display;

use crate::types::{
    core_type::CoreType,
    definition::{Declaration, FieldDescriptor},
    error::ResolutionError,
    registry::TypeIntrospection,
    type_key::TypeKey,
};

/// Size (and alignment) of a field that holds a reference instead of
/// inline data.
pub const REFERENCE_SIZE: usize = 8;

/// Static classification of a concrete runtime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    pub key: TypeKey,
    pub kind: TypeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    IdentityBearing,
    ValueLayout(Layout),
    Numeric(NumericRepr),
    NullableWrapper(TypeKey),
    Container(ContainerShape),
}

/// Underlying fixed-width representation of a numeric type. Enumerations
/// carry the integer type they are declared over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NumericRepr {
    pub core: CoreType,
    pub enumeration: bool,
}

impl NumericRepr {
    pub fn width(&self) -> usize {
        self.core.size().unwrap_or(REFERENCE_SIZE)
    }

    pub fn is_single_byte(&self) -> bool {
        self.width() == 1
    }

    pub fn is_signed(&self) -> bool {
        self.core.is_signed_integer() || self.core.is_float()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerShape {
    /// Variable length sequence with a declared element type.
    Array(TypeKey),
    /// Fixed arity sequence.
    Tuple(Vec<TypeKey>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Byte extent of an instance, including padding.
    pub size: usize,
    pub align: usize,
    /// No padding and no embedded references anywhere in the layout.
    pub tightly_packed: bool,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Classifies `key` by probing, in priority order: nullable wrapper,
    /// numeric, container, identity-bearing, value layout.
    pub fn describe(
        key: &TypeKey,
        types: &dyn TypeIntrospection,
    ) -> Result<TypeDescriptor, ResolutionError> {
        let kind = if let TypeKey::Nullable(inner) = key {
            TypeKind::NullableWrapper((**inner).clone())
        } else if let Some(repr) = numeric_repr(key, types)? {
            TypeKind::Numeric(repr)
        } else if let Some(shape) = container_shape(key, types) {
            TypeKind::Container(shape)
        } else if is_identity_bearing(key, types)? {
            TypeKind::IdentityBearing
        } else if reaches_itself(key, types) {
            return Err(ResolutionError::CyclicLayout(key.clone()));
        } else {
            TypeKind::ValueLayout(layout_of(key, types, &mut Vec::new())?)
        };
        Ok(TypeDescriptor {
            key: key.clone(),
            kind,
        })
    }

    pub fn layout(&self) -> Option<&Layout> {
        match &self.kind {
            TypeKind::ValueLayout(layout) => Some(layout),
            _ => None,
        }
    }
}

fn declaration(
    key: &TypeKey,
    types: &dyn TypeIntrospection,
) -> Result<Option<Declaration>, ResolutionError> {
    match key {
        TypeKey::Named(path) => types
            .declaration_of(path)
            .map(Some)
            .ok_or_else(|| ResolutionError::UnknownType(path.clone())),
        _ => Ok(None),
    }
}

fn numeric_repr(
    key: &TypeKey,
    types: &dyn TypeIntrospection,
) -> Result<Option<NumericRepr>, ResolutionError> {
    Ok(match key {
        TypeKey::Core(core) if core.is_numeric() => Some(NumericRepr {
            core: *core,
            enumeration: false,
        }),
        TypeKey::Named(_) => match declaration(key, types)? {
            Some(Declaration::Enum(underlying)) if underlying.is_integer() => {
                Some(NumericRepr {
                    core: underlying,
                    enumeration: true,
                })
            }
            Some(Declaration::Enum(_)) => {
                return Err(ResolutionError::Unclassifiable(key.clone()));
            }
            _ => None,
        },
        _ => None,
    })
}

fn container_shape(
    key: &TypeKey,
    types: &dyn TypeIntrospection,
) -> Option<ContainerShape> {
    let elements = types.container_elements(key)?;
    Some(match key {
        TypeKey::Array(element) => ContainerShape::Array((**element).clone()),
        _ => ContainerShape::Tuple(elements),
    })
}

fn is_identity_bearing(
    key: &TypeKey,
    types: &dyn TypeIntrospection,
) -> Result<bool, ResolutionError> {
    match key {
        TypeKey::Any | TypeKey::Core(CoreType::Text) => Ok(true),
        TypeKey::Named(_) => match declaration(key, types)? {
            Some(Declaration::Class(_)) => Ok(true),
            Some(Declaration::Struct(_)) => Ok(false),
            _ => Err(ResolutionError::Unclassifiable(key.clone())),
        },
        _ => Err(ResolutionError::Unclassifiable(key.clone())),
    }
}

/// Whether a value of the struct `key` can hold another value of `key`
/// through its fields, directly or behind nullable wrappers.
fn reaches_itself(key: &TypeKey, types: &dyn TypeIntrospection) -> bool {
    let mut seen: Vec<TypeKey> = Vec::new();
    let mut pending: Vec<TypeKey> =
        types.fields_of(key).into_iter().map(|field| field.ty).collect();
    while let Some(mut ty) = pending.pop() {
        while let TypeKey::Nullable(inner) = ty {
            ty = *inner;
        }
        if &ty == key {
            return true;
        }
        if seen.contains(&ty) {
            continue;
        }
        if let TypeKey::Named(path) = &ty {
            if let Some(Declaration::Struct(fields)) = types.declaration_of(path) {
                pending.extend(fields.into_iter().map(|field| field.ty));
            }
        }
        seen.push(ty);
    }
    false
}

struct FieldLayout {
    size: usize,
    align: usize,
    tightly_packed: bool,
}

impl FieldLayout {
    fn reference() -> Self {
        FieldLayout {
            size: REFERENCE_SIZE,
            align: REFERENCE_SIZE,
            tightly_packed: false,
        }
    }

    fn inline(core: CoreType) -> Self {
        match core.size() {
            Some(size) => FieldLayout {
                size,
                align: size,
                tightly_packed: true,
            },
            None => FieldLayout::reference(),
        }
    }
}

fn layout_of(
    key: &TypeKey,
    types: &dyn TypeIntrospection,
    visiting: &mut Vec<TypeKey>,
) -> Result<Layout, ResolutionError> {
    if visiting.contains(key) {
        return Err(ResolutionError::CyclicLayout(key.clone()));
    }
    visiting.push(key.clone());

    let fields = types.fields_of(key);
    let mut offset: usize = 0;
    let mut payload: usize = 0;
    let mut align: usize = 1;
    let mut tightly_packed = true;
    for field in &fields {
        let field_layout = field_layout(&field.ty, types, visiting)?;
        offset = offset.next_multiple_of(field_layout.align);
        offset += field_layout.size;
        payload += field_layout.size;
        align = align.max(field_layout.align);
        tightly_packed &= field_layout.tightly_packed;
    }
    visiting.pop();

    let size = offset.next_multiple_of(align);
    Ok(Layout {
        size,
        align,
        tightly_packed: tightly_packed && size == payload,
        fields,
    })
}

fn field_layout(
    ty: &TypeKey,
    types: &dyn TypeIntrospection,
    visiting: &mut Vec<TypeKey>,
) -> Result<FieldLayout, ResolutionError> {
    Ok(match ty {
        TypeKey::Core(core) => FieldLayout::inline(*core),
        TypeKey::Named(_) => match declaration(ty, types)? {
            Some(Declaration::Enum(underlying)) => FieldLayout::inline(underlying),
            Some(Declaration::Struct(_)) => {
                let nested = layout_of(ty, types, visiting)?;
                FieldLayout {
                    size: nested.size,
                    align: nested.align,
                    tightly_packed: nested.tightly_packed,
                }
            }
            _ => FieldLayout::reference(),
        },
        TypeKey::Any
        | TypeKey::Nullable(_)
        | TypeKey::Array(_)
        | TypeKey::Tuple(_) => FieldLayout::reference(),
    })
}
