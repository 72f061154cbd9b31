//! Parsed schema node types.
//!
//! A [`SchemaNode`] is the immutable tree the canonical parser produces.
//! Every node has a [`SchemaKind`] tag from a closed set; composite kinds
//! carry their substructure.

use serde_json::Value;
use std::fmt;

/// Type tag of a parsed schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed,
    Enum,
    Record,
    Array,
    Map,
    Union,
    Decimal,
    Uuid,
    Date,
    TimeMillis,
    TimeMicros,
    TimestampMillis,
    TimestampMicros,
    LocalTimestampMillis,
    LocalTimestampMicros,
    Duration,
    /// Reference to a named type defined elsewhere in the schema
    Ref,
    /// A type the generator has no policy for (e.g. nanosecond timestamps)
    Unsupported,
}

impl SchemaKind {
    /// The Avro spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Null => "null",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Int => "int",
            SchemaKind::Long => "long",
            SchemaKind::Float => "float",
            SchemaKind::Double => "double",
            SchemaKind::Bytes => "bytes",
            SchemaKind::String => "string",
            SchemaKind::Fixed => "fixed",
            SchemaKind::Enum => "enum",
            SchemaKind::Record => "record",
            SchemaKind::Array => "array",
            SchemaKind::Map => "map",
            SchemaKind::Union => "union",
            SchemaKind::Decimal => "decimal",
            SchemaKind::Uuid => "uuid",
            SchemaKind::Date => "date",
            SchemaKind::TimeMillis => "time-millis",
            SchemaKind::TimeMicros => "time-micros",
            SchemaKind::TimestampMillis => "timestamp-millis",
            SchemaKind::TimestampMicros => "timestamp-micros",
            SchemaKind::LocalTimestampMillis => "local-timestamp-millis",
            SchemaKind::LocalTimestampMicros => "local-timestamp-micros",
            SchemaKind::Duration => "duration",
            SchemaKind::Ref => "ref",
            SchemaKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully qualified name of a named type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    pub name: String,
    pub namespace: Option<String>,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// `namespace.name`, or just `name` without a namespace.
    pub fn fullname(&self) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl From<&apache_avro::schema::Name> for Name {
    fn from(name: &apache_avro::schema::Name) -> Self {
        Self {
            name: name.name.clone(),
            namespace: name.namespace.clone(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fullname())
    }
}

/// One field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub schema: SchemaNode,
    /// Default literal, used verbatim by the generator
    pub default: Option<Value>,
}

impl RecordField {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// A record declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub name: Name,
    pub fields: Vec<RecordField>,
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&RecordField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A node of the parsed schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed { name: Name, size: usize },
    Enum { name: Name, symbols: Vec<String> },
    Record(RecordSchema),
    Array(Box<SchemaNode>),
    Map(Box<SchemaNode>),
    Union(Vec<SchemaNode>),
    Decimal { precision: usize, scale: usize },
    Uuid,
    Date,
    TimeMillis,
    TimeMicros,
    TimestampMillis,
    TimestampMicros,
    LocalTimestampMillis,
    LocalTimestampMicros,
    Duration,
    Ref(Name),
    /// Carries a description of the unsupported type for diagnostics
    Unsupported(String),
}

impl SchemaNode {
    /// The type tag of this node.
    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaNode::Null => SchemaKind::Null,
            SchemaNode::Boolean => SchemaKind::Boolean,
            SchemaNode::Int => SchemaKind::Int,
            SchemaNode::Long => SchemaKind::Long,
            SchemaNode::Float => SchemaKind::Float,
            SchemaNode::Double => SchemaKind::Double,
            SchemaNode::Bytes => SchemaKind::Bytes,
            SchemaNode::String => SchemaKind::String,
            SchemaNode::Fixed { .. } => SchemaKind::Fixed,
            SchemaNode::Enum { .. } => SchemaKind::Enum,
            SchemaNode::Record(_) => SchemaKind::Record,
            SchemaNode::Array(_) => SchemaKind::Array,
            SchemaNode::Map(_) => SchemaKind::Map,
            SchemaNode::Union(_) => SchemaKind::Union,
            SchemaNode::Decimal { .. } => SchemaKind::Decimal,
            SchemaNode::Uuid => SchemaKind::Uuid,
            SchemaNode::Date => SchemaKind::Date,
            SchemaNode::TimeMillis => SchemaKind::TimeMillis,
            SchemaNode::TimeMicros => SchemaKind::TimeMicros,
            SchemaNode::TimestampMillis => SchemaKind::TimestampMillis,
            SchemaNode::TimestampMicros => SchemaKind::TimestampMicros,
            SchemaNode::LocalTimestampMillis => SchemaKind::LocalTimestampMillis,
            SchemaNode::LocalTimestampMicros => SchemaKind::LocalTimestampMicros,
            SchemaNode::Duration => SchemaKind::Duration,
            SchemaNode::Ref(_) => SchemaKind::Ref,
            SchemaNode::Unsupported(_) => SchemaKind::Unsupported,
        }
    }

    /// Name of a named type (record, enum, fixed) or reference.
    pub fn name(&self) -> Option<&Name> {
        match self {
            SchemaNode::Fixed { name, .. }
            | SchemaNode::Enum { name, .. }
            | SchemaNode::Ref(name) => Some(name),
            SchemaNode::Record(record) => Some(&record.name),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SchemaNode::Null)
    }
}
