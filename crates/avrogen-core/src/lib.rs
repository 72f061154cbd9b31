//! Core types for avrogen.
//!
//! This crate covers everything between an author-written schema
//! description and a parsed schema tree:
//!
//! - [`SchemaDescription`] - Loose, shorthand schema loaded from YAML/JSON
//! - [`SchemaNormalizer`] and [`TypeBuilder`] - Shorthand expansion
//! - [`CanonicalSchema`] - Normalized schema, serializable to Avro JSON
//! - [`ParsedSchema`] / [`SchemaNode`] - Immutable tree from the canonical parser
//! - [`GeneratedValue`] - Value tree produced by the generator
//!
//! # Architecture
//!
//! ```text
//! SchemaDescription ──normalize──▶ CanonicalSchema ──JSON──▶ CanonicalParser
//!                                                                 │
//!                                                                 ▼
//!                                                           ParsedSchema
//!                                                                 │
//!                                     avrogen-generator ◀─────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use avrogen_core::{prepare_schema, ParsedSchema, SchemaDescription, SchemaKind};
//!
//! let desc = SchemaDescription::from_yaml(r#"
//! type: record
//! name: User
//! fields:
//!   - name: nickname
//!     type: string*
//! "#).unwrap();
//!
//! let canonical = prepare_schema(&desc).unwrap();
//! let parsed = ParsedSchema::parse_str(&canonical.to_json_string().unwrap()).unwrap();
//! assert_eq!(parsed.root().kind(), SchemaKind::Record);
//! ```

pub mod builders;
pub mod canonical;
pub mod description;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use builders::{as_field, make_nullable, BuildContext, TypeBuilder};
pub use canonical::{CanonicalSchema, CanonicalType};
pub use description::{SchemaDescription, TypeDescription, Variant, NULLABLE_SUFFIX};
pub use error::{NormalizeError, ParseError, ParseResult, SchemaError};
pub use normalize::{prepare_schema, SchemaNormalizer};
pub use parser::{CanonicalParser, ParsedSchema, SchemaParser};
pub use types::{Name, RecordField, RecordSchema, SchemaKind, SchemaNode};
pub use values::GeneratedValue;
