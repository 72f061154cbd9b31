//! Leaf value generators.
//!
//! Each function implements the generation policy of one leaf type tag.
//! Container tags (array, map, union, record) are handled by
//! [`ValueGenerator`](crate::ValueGenerator) since they recurse.

pub mod logical;
pub mod primitive;
pub mod uuid;
