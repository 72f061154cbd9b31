//! Forward conversion: GeneratedValue → JSON value.
//!
//! Bytes are base64 encoded. Non-finite floats have no JSON form and
//! become `null`.

use avrogen_core::GeneratedValue;
use base64::Engine;
use serde_json::json;
use std::collections::BTreeMap;

/// Convert a GeneratedValue to a JSON value.
pub fn generated_value_to_json(value: &GeneratedValue) -> serde_json::Value {
    match value {
        GeneratedValue::Null => serde_json::Value::Null,
        GeneratedValue::Bool(b) => json!(*b),
        GeneratedValue::Int32(i) => json!(*i),
        GeneratedValue::Int64(i) => json!(*i),
        GeneratedValue::Float32(f) => float_to_json(*f as f64),
        GeneratedValue::Float64(f) => float_to_json(*f),
        GeneratedValue::String(s) => json!(s),
        GeneratedValue::Bytes(b) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(b);
            json!(encoded)
        }
        GeneratedValue::Array(arr) => {
            json!(arr.iter().map(generated_value_to_json).collect::<Vec<_>>())
        }
        GeneratedValue::Object(map) => object_to_json(map),
    }
}

fn float_to_json(f: f64) -> serde_json::Value {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn object_to_json(map: &BTreeMap<String, GeneratedValue>) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    for (key, value) in map {
        obj.insert(key.clone(), generated_value_to_json(value));
    }
    serde_json::Value::Object(obj)
}
