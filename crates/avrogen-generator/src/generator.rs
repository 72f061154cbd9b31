//! Recursive value generation over a parsed schema tree.

use crate::error::GenerationError;
use crate::generators::{logical, primitive, uuid};
use avrogen_core::{GeneratedValue, ParsedSchema, RecordSchema, SchemaKind, SchemaNode};
use avrogen_json::json_to_generated_value;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::BTreeMap;

/// Default limit on nesting depth before generation gives up.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bound (inclusive) on generated array and map sizes.
pub const MAX_COLLECTION_SIZE: usize = 5;

/// Tuning knobs for value generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Nesting depth at which generation fails with
    /// [`GenerationError::DepthExceeded`]
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Walks a [`ParsedSchema`] and produces a synthetic value per node.
///
/// All randomness comes from the supplied RNG and all time-based values
/// from a single clock instant, so a seeded RNG plus a pinned clock gives
/// reproducible output.
pub struct ValueGenerator<'a, R: Rng + ?Sized> {
    schema: &'a ParsedSchema,
    rng: &'a mut R,
    now: DateTime<Utc>,
    config: GeneratorConfig,
}

impl<'a, R: Rng + ?Sized> ValueGenerator<'a, R> {
    /// Create a generator reading the clock once, at construction.
    pub fn new(schema: &'a ParsedSchema, rng: &'a mut R) -> Self {
        Self {
            schema,
            rng,
            now: Utc::now(),
            config: GeneratorConfig::default(),
        }
    }

    /// Pin the clock instant used for date and time values.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate a value for the schema root in non-nested mode.
    pub fn generate_root(&mut self) -> Result<GeneratedValue, GenerationError> {
        let schema = self.schema;
        self.generate(schema.root(), false)
    }

    /// Generate a value for `node`.
    ///
    /// In non-nested mode a record value is wrapped in a single-entry
    /// object keyed by the record's short name.
    pub fn generate(
        &mut self,
        node: &SchemaNode,
        nested: bool,
    ) -> Result<GeneratedValue, GenerationError> {
        self.generate_at(node, nested, 0)
    }

    fn generate_at(
        &mut self,
        node: &SchemaNode,
        nested: bool,
        depth: usize,
    ) -> Result<GeneratedValue, GenerationError> {
        if depth > self.config.max_depth {
            return Err(GenerationError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        }

        let value = match node {
            SchemaNode::Null => return Err(GenerationError::NullLeaf),
            SchemaNode::Boolean => GeneratedValue::Bool(true),
            SchemaNode::Int => primitive::generate_int(&mut *self.rng),
            SchemaNode::Long => primitive::generate_long(&mut *self.rng),
            SchemaNode::Float => primitive::generate_float(&mut *self.rng),
            SchemaNode::Double => primitive::generate_double(&mut *self.rng),
            SchemaNode::Bytes => primitive::generate_bytes(),
            SchemaNode::String | SchemaNode::Uuid => uuid::generate_uuid_string(&mut *self.rng),
            SchemaNode::Fixed { size, .. } => primitive::generate_fixed(*size),
            SchemaNode::Enum { symbols, .. } => {
                GeneratedValue::String(symbols.first().cloned().unwrap_or_default())
            }
            SchemaNode::Record(record) => self.generate_record(record, nested, depth)?,
            SchemaNode::Array(items) => {
                let len = self.rng.gen_range(1..=MAX_COLLECTION_SIZE);
                let nested_items = self.is_record(items);
                let mut values = Vec::with_capacity(len);
                for _ in 0..len {
                    values.push(self.generate_at(items, nested_items, depth + 1)?);
                }
                GeneratedValue::Array(values)
            }
            SchemaNode::Map(values) => {
                let len = self.rng.gen_range(1..=MAX_COLLECTION_SIZE);
                let nested_values = self.is_record(values);
                let mut entries = BTreeMap::new();
                for i in 0..len {
                    let value = self.generate_at(values, nested_values, depth + 1)?;
                    entries.insert(format!("key_{i}"), value);
                }
                GeneratedValue::Object(entries)
            }
            SchemaNode::Union(members) => {
                let member = match members.as_slice() {
                    [] => return Err(GenerationError::EmptyUnion),
                    [first, second, ..] if first.is_null() => second,
                    [first, ..] => first,
                };
                self.generate_at(member, false, depth + 1)?
            }
            SchemaNode::Decimal { precision, .. } => {
                logical::generate_decimal(&mut *self.rng, *precision)
            }
            SchemaNode::Date => logical::generate_date(&self.now),
            SchemaNode::TimeMillis => logical::generate_time_millis(&self.now),
            SchemaNode::TimeMicros => logical::generate_time_micros(&self.now),
            SchemaNode::TimestampMillis => logical::generate_timestamp_millis(&self.now),
            SchemaNode::TimestampMicros => logical::generate_timestamp_micros(&self.now),
            SchemaNode::Duration => logical::generate_duration(),
            SchemaNode::LocalTimestampMillis
            | SchemaNode::LocalTimestampMicros
            | SchemaNode::Unsupported(_) => {
                tracing::warn!(
                    "No generation policy for {}; emitting an empty string",
                    node.kind()
                );
                GeneratedValue::String(String::new())
            }
            SchemaNode::Ref(name) => {
                let schema = self.schema;
                let resolved = schema
                    .lookup(&name.fullname())
                    .ok_or_else(|| GenerationError::UnresolvedReference(name.fullname()))?;
                self.generate_at(resolved, nested, depth)?
            }
        };

        Ok(value)
    }

    fn generate_record(
        &mut self,
        record: &RecordSchema,
        nested: bool,
        depth: usize,
    ) -> Result<GeneratedValue, GenerationError> {
        let mut fields = BTreeMap::new();
        for field in &record.fields {
            let value = match &field.default {
                Some(default) => json_to_generated_value(default),
                None => {
                    let nested_field = self.is_record(&field.schema);
                    self.generate_at(&field.schema, nested_field, depth + 1)?
                }
            };
            fields.insert(field.name.clone(), value);
        }

        let value = GeneratedValue::Object(fields);
        if nested {
            Ok(value)
        } else {
            Ok(GeneratedValue::Object(BTreeMap::from([(
                record.name.name.clone(),
                value,
            )])))
        }
    }

    /// Whether `node` is a record once references are followed.
    fn is_record(&self, node: &SchemaNode) -> bool {
        self.schema
            .resolve(node)
            .is_some_and(|resolved| resolved.kind() == SchemaKind::Record)
    }
}
