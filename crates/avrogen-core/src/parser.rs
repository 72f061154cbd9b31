//! Canonical schema parsing.
//!
//! Canonical schema JSON is parsed and validated by `apache_avro`, then
//! mapped into the [`SchemaNode`] tree the generator walks. Named types are
//! collected into a registry so [`SchemaNode::Ref`] nodes can be resolved.
//!
//! The parser is reached through the [`SchemaParser`] trait so a different
//! implementation can be plugged in by callers.

use crate::error::ParseResult;
use crate::types::{Name, RecordField, RecordSchema, SchemaNode};
use apache_avro::Schema;
use serde_json::Value;
use std::collections::HashMap;

/// Contract for turning canonical schema text into a parsed tree.
pub trait SchemaParser {
    fn parse(&self, canonical_json: &str) -> ParseResult<ParsedSchema>;
}

/// The built-in parser, backed by `apache_avro`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanonicalParser;

impl SchemaParser for CanonicalParser {
    fn parse(&self, canonical_json: &str) -> ParseResult<ParsedSchema> {
        ParsedSchema::parse_str(canonical_json)
    }
}

/// A parsed schema: root node plus named-type registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSchema {
    root: SchemaNode,
    names: HashMap<String, SchemaNode>,
}

impl ParsedSchema {
    /// Parse canonical schema JSON text.
    pub fn parse_str(json: &str) -> ParseResult<Self> {
        Ok(Self::from_avro(&Schema::parse_str(json)?))
    }

    /// Parse an already-decoded canonical schema.
    pub fn parse_value(value: &Value) -> ParseResult<Self> {
        Ok(Self::from_avro(&Schema::parse(value)?))
    }

    /// Map a schema already validated by `apache_avro`.
    pub fn from_avro(schema: &Schema) -> Self {
        let mut names = HashMap::new();
        let root = convert(schema, &mut names);
        Self { root, names }
    }

    /// The root node.
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Look up a named type by full name.
    pub fn lookup(&self, fullname: &str) -> Option<&SchemaNode> {
        self.names.get(fullname)
    }

    /// Follow a reference to its definition. Non-reference nodes resolve
    /// to themselves.
    pub fn resolve<'a>(&'a self, node: &'a SchemaNode) -> Option<&'a SchemaNode> {
        match node {
            SchemaNode::Ref(name) => self.lookup(&name.fullname()),
            other => Some(other),
        }
    }
}

/// Register a named definition and hand it back.
fn define(node: SchemaNode, names: &mut HashMap<String, SchemaNode>) -> SchemaNode {
    if let Some(name) = node.name() {
        names.insert(name.fullname(), node.clone());
    }
    node
}

fn convert(schema: &Schema, names: &mut HashMap<String, SchemaNode>) -> SchemaNode {
    match schema {
        Schema::Null => SchemaNode::Null,
        Schema::Boolean => SchemaNode::Boolean,
        Schema::Int => SchemaNode::Int,
        Schema::Long => SchemaNode::Long,
        Schema::Float => SchemaNode::Float,
        Schema::Double => SchemaNode::Double,
        Schema::Bytes => SchemaNode::Bytes,
        Schema::String => SchemaNode::String,
        Schema::Array(array) => SchemaNode::Array(Box::new(convert(&array.items, names))),
        Schema::Map(map) => SchemaNode::Map(Box::new(convert(&map.types, names))),
        Schema::Union(union) => SchemaNode::Union(
            union
                .variants()
                .iter()
                .map(|variant| convert(variant, names))
                .collect(),
        ),
        Schema::Record(record) => {
            let fields = record
                .fields
                .iter()
                .map(|field| RecordField {
                    name: field.name.clone(),
                    schema: convert(&field.schema, names),
                    default: field.default.clone(),
                })
                .collect();
            let node = SchemaNode::Record(RecordSchema {
                name: Name::from(&record.name),
                fields,
            });
            define(node, names)
        }
        Schema::Enum(enumeration) => define(
            SchemaNode::Enum {
                name: Name::from(&enumeration.name),
                symbols: enumeration.symbols.clone(),
            },
            names,
        ),
        Schema::Fixed(fixed) => define(
            SchemaNode::Fixed {
                name: Name::from(&fixed.name),
                size: fixed.size,
            },
            names,
        ),
        Schema::Decimal(decimal) => SchemaNode::Decimal {
            precision: decimal.precision,
            scale: decimal.scale,
        },
        Schema::Uuid { .. } => SchemaNode::Uuid,
        Schema::Date => SchemaNode::Date,
        Schema::TimeMillis => SchemaNode::TimeMillis,
        Schema::TimeMicros => SchemaNode::TimeMicros,
        Schema::TimestampMillis => SchemaNode::TimestampMillis,
        Schema::TimestampMicros => SchemaNode::TimestampMicros,
        Schema::LocalTimestampMillis => SchemaNode::LocalTimestampMillis,
        Schema::LocalTimestampMicros => SchemaNode::LocalTimestampMicros,
        Schema::Duration { .. } => SchemaNode::Duration,
        Schema::Ref { name } => SchemaNode::Ref(Name::from(name)),
        other => {
            tracing::debug!("No schema node for {other:?}");
            SchemaNode::Unsupported(format!("{other:?}"))
        }
    }
}
