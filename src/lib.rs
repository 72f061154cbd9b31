//! avrogen
//!
//! Turns compact, author-friendly Avro schema descriptions into canonical
//! Avro schemas and generates structurally valid sample values for them.
//!
//! # Crates
//!
//! - `avrogen_core` - Descriptions, normalization, canonical parsing
//! - `avrogen_generator` - Value generation over parsed schemas
//! - `avrogen_json` - JSON rendering of generated values
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the canonical schema
//! avrogen prepare --schema user.yaml --pretty
//!
//! # Write 100 reproducible JSON lines
//! avrogen generate --schema user.yaml --count 100 --seed 42 --output users.jsonl
//! ```

pub mod args;
pub mod commands;
pub mod writer;

pub use args::{GenerateArgs, PrepareArgs};
pub use commands::{run_generate, run_prepare};
pub use writer::{JsonlWriter, WriteMetrics};

pub use avrogen_core::{
    prepare_schema, CanonicalSchema, GeneratedValue, NormalizeError, ParseError, ParsedSchema,
    SchemaDescription, SchemaError,
};
pub use avrogen_generator::{construct, DataGenerator, GenerationError, SchemaHandle};
