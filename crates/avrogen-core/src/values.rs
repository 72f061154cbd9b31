//! Generated value representation.
//!
//! `GeneratedValue` is the native value tree produced by the generator. It
//! mirrors the schema node that produced it, except that unions collapse to
//! a single member's value.

use std::collections::BTreeMap;

/// A synthetic value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// Null value (only ever produced from default literals)
    Null,

    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// Binary data
    Bytes(Vec<u8>),

    /// String value
    String(String),

    /// Sequence of values
    Array(Vec<GeneratedValue>),

    /// Mapping with string keys (maps and records)
    Object(BTreeMap<String, GeneratedValue>),
}

impl GeneratedValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i32.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            Self::Int32(i) => Some(*i as i64),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            Self::Float32(f) => Some(*f as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&Vec<GeneratedValue>> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to get this value as an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, GeneratedValue>> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Look up a key of an object value.
    pub fn get(&self, key: &str) -> Option<&GeneratedValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }
}
