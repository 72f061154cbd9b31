//! Synthetic value generation for parsed Avro schemas.
//!
//! - [`ValueGenerator`] - Recursive walk producing one value per schema node
//! - [`SchemaHandle`] / [`construct`] - Normalize + parse a description once,
//!   then generate values from it
//! - [`DataGenerator`] - Seeded, resumable stream of values
//!
//! # Example
//!
//! ```rust
//! use avrogen_core::SchemaDescription;
//! use avrogen_generator::{construct, DataGenerator};
//!
//! let desc = SchemaDescription::from_yaml(r#"
//! type: record
//! name: Order
//! fields:
//!   - name: id
//!     type: string
//!   - name: quantity
//!     type: int
//! "#).unwrap();
//!
//! let handle = construct(&desc).unwrap();
//! let mut generator = DataGenerator::new(handle, 42);
//! for value in generator.values(3) {
//!     let value = value.unwrap();
//!     assert!(value.get("Order").is_some());
//! }
//! ```

pub mod error;
pub mod generator;
pub mod generators;
pub mod handle;
pub mod stream;

pub use error::GenerationError;
pub use generator::{GeneratorConfig, ValueGenerator, DEFAULT_MAX_DEPTH, MAX_COLLECTION_SIZE};
pub use handle::{construct, SchemaHandle};
pub use stream::{DataGenerator, ValueIterator};
