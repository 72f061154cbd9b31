//! Error types for value generation.

use thiserror::Error;

/// Errors that abort a generation call.
///
/// Unknown type tags are not errors: they produce an empty string and
/// generation continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// A standalone `null` schema was reached
    #[error("Cannot generate a value for a null schema")]
    NullLeaf,

    /// A union without members was reached
    #[error("Cannot generate a value for an empty union")]
    EmptyUnion,

    /// A named-type reference has no definition in the schema
    #[error("Unresolved named type reference: {0}")]
    UnresolvedReference(String),

    /// Nesting went deeper than the configured limit (recursive schema)
    #[error("Maximum nesting depth of {max_depth} exceeded")]
    DepthExceeded { max_depth: usize },
}
