//! Author-facing schema descriptions.
//!
//! A description is the loose, shorthand form of an Avro schema. Types can
//! carry a nullability suffix, unions can be written inline as a list, and
//! complex types can be declared anonymously inside a field.
//!
//! # YAML Format
//!
//! ```yaml
//! type: record
//! name: User
//! fields:
//!   - name: id
//!     type: string
//!   - name: nickname
//!     type: string*          # nullable, expands to [null, string]
//!   - name: tags
//!     type: array*
//!     items: string
//!   - name: contact
//!     type: [string, long]   # anonymous union
//! ```

use crate::error::SchemaError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Marker appended to a type name to declare it nullable.
pub const NULLABLE_SUFFIX: char = '*';

/// One node of a schema description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescription {
    /// Field or type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Type declaration: a name, an inline union, or a nested description
    #[serde(rename = "type")]
    pub ty: TypeDescription,

    /// Record fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SchemaDescription>>,

    /// Array item type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Variant>>,

    /// Map value type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Box<Variant>>,

    /// Union members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,

    /// Default value. An explicit `null` is kept as `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,

    /// Every other key (`namespace`, `symbols`, `size`, `logicalType`, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Shape of a description's `type` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeDescription {
    /// A type name, optionally suffixed with [`NULLABLE_SUFFIX`]
    Name(String),

    /// An anonymous union
    Union(Vec<Variant>),

    /// An anonymous complex type
    Nested(Box<SchemaDescription>),
}

/// A union member, array item or map value: a bare type name or a full
/// description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variant {
    Name(String),
    Schema(SchemaDescription),
}

impl Variant {
    /// Expand a bare type name into `{type: name}`.
    pub fn to_description(&self) -> SchemaDescription {
        match self {
            Variant::Name(name) => SchemaDescription::of_type(name.clone()),
            Variant::Schema(desc) => desc.clone(),
        }
    }
}

impl From<&str> for Variant {
    fn from(name: &str) -> Self {
        Variant::Name(name.to_string())
    }
}

impl From<SchemaDescription> for Variant {
    fn from(desc: SchemaDescription) -> Self {
        Variant::Schema(desc)
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SchemaDescription {
    /// Create a description with the given type and nothing else.
    pub fn new(ty: TypeDescription) -> Self {
        Self {
            name: None,
            ty,
            fields: None,
            items: None,
            values: None,
            variants: None,
            default: None,
            attributes: Map::new(),
        }
    }

    /// Create a description of a named type, e.g. `int` or `array*`.
    pub fn of_type(name: impl Into<String>) -> Self {
        Self::new(TypeDescription::Name(name.into()))
    }

    /// Create an anonymous union description.
    pub fn union_of<I, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Variant>,
    {
        Self::new(TypeDescription::Union(
            variants.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create a field whose type is an anonymous nested declaration.
    pub fn nested(nested: SchemaDescription) -> Self {
        Self::new(TypeDescription::Nested(Box::new(nested)))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_fields(mut self, fields: Vec<SchemaDescription>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_items(mut self, items: impl Into<Variant>) -> Self {
        self.items = Some(Box::new(items.into()));
        self
    }

    pub fn with_values(mut self, values: impl Into<Variant>) -> Self {
        self.values = Some(Box::new(values.into()));
        self
    }

    pub fn with_variants<I, V>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Variant>,
    {
        self.variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Load a description from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a description from YAML. JSON input is accepted as well.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-decoded JSON value into a description.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }
}
