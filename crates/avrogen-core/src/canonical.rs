//! Canonical schema representation produced by normalization.
//!
//! A [`CanonicalSchema`] has the same shape as a description, but every
//! `type` is resolved: a type name, a union member list, or an embedded
//! declaration. Serializing it yields JSON that the canonical parser
//! accepts.

use serde::Serialize;
use serde_json::{Map, Value};

/// A normalized schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub ty: CanonicalType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<CanonicalSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<CanonicalType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Box<CanonicalType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalType {
    /// Primitive, complex category or named-type reference
    Name(String),

    /// Union member list
    Union(Vec<CanonicalType>),

    /// Embedded declaration
    Declaration(Box<CanonicalSchema>),
}

impl CanonicalSchema {
    /// Create a node with only a type.
    pub fn new(ty: CanonicalType) -> Self {
        Self {
            name: None,
            ty,
            fields: None,
            items: None,
            values: None,
            default: None,
            attributes: Map::new(),
        }
    }

    /// Whether the node carries nothing but its type.
    pub fn is_bare(&self) -> bool {
        self.name.is_none()
            && self.fields.is_none()
            && self.items.is_none()
            && self.values.is_none()
            && self.default.is_none()
            && self.attributes.is_empty()
    }

    /// Turn this node into a type reference, collapsing `{type: X}` to `X`.
    pub fn into_type(self) -> CanonicalType {
        if self.is_bare() {
            self.ty
        } else {
            CanonicalType::Declaration(Box::new(self))
        }
    }

    /// The type name, if the type is a plain name.
    pub fn type_name(&self) -> Option<&str> {
        self.ty.as_name()
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Serialize to compact JSON text, the form handed to the parser.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl CanonicalType {
    pub fn name(name: impl Into<String>) -> Self {
        CanonicalType::Name(name.into())
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            CanonicalType::Name(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&[CanonicalType]> {
        match self {
            CanonicalType::Union(members) => Some(members),
            _ => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&CanonicalSchema> {
        match self {
            CanonicalType::Declaration(decl) => Some(decl),
            _ => None,
        }
    }
}
