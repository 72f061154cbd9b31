//! Error types for schema preparation and parsing.

use thiserror::Error;

/// Errors raised while normalizing a schema description.
///
/// These are configuration errors: the description asks for something the
/// builders cannot expand.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The `type` string names no known builder
    #[error("Unknown type {0}")]
    UnknownType(String),

    /// A category-specific key is absent (e.g. `fields` on a record)
    #[error("Missing '{attribute}' on {category} declaration")]
    MissingAttribute {
        category: &'static str,
        attribute: &'static str,
    },
}

/// Errors raised by the canonical schema parser.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The canonical schema was rejected by the Avro schema parser
    #[error("Invalid Avro schema: {0}")]
    Avro(#[from] apache_avro::Error),
}

/// Errors raised while turning a description into a usable schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Error reading a description file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a YAML description
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing a JSON description or serializing a canonical schema
    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The description could not be normalized
    #[error("Configuration error: {0}")]
    Configuration(#[from] NormalizeError),

    /// The canonical schema was rejected by the parser
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type alias for schema parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
