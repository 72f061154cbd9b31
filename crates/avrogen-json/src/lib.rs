//! JSON conversions for avrogen values.
//!
//! # Modules
//!
//! - [`forward`] - GeneratedValue → JSON value conversion
//! - [`reverse`] - JSON literal → GeneratedValue conversion
//!
//! # Example
//!
//! ```rust
//! use avrogen_core::GeneratedValue;
//! use avrogen_json::{generated_value_to_json, json_to_generated_value};
//!
//! let json_val = generated_value_to_json(&GeneratedValue::Bytes(b"abc".to_vec()));
//! assert_eq!(json_val, serde_json::json!("YWJj"));
//!
//! let value = json_to_generated_value(&serde_json::json!([1, "a"]));
//! assert_eq!(value.as_array().map(Vec::len), Some(2));
//! ```

pub mod forward;
pub mod reverse;

pub use forward::generated_value_to_json;
pub use reverse::json_to_generated_value;
