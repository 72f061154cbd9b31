//! Reverse conversion: JSON literal → GeneratedValue.
//!
//! Used for record field defaults, which are emitted verbatim.

use avrogen_core::GeneratedValue;
use std::collections::BTreeMap;

/// Convert a JSON value to a GeneratedValue without schema context.
///
/// Integers become `Int64`, other numbers `Float64`.
pub fn json_to_generated_value(value: &serde_json::Value) -> GeneratedValue {
    match value {
        serde_json::Value::Null => GeneratedValue::Null,
        serde_json::Value::Bool(b) => GeneratedValue::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                GeneratedValue::Int64(i)
            } else if let Some(f) = n.as_f64() {
                GeneratedValue::Float64(f)
            } else {
                GeneratedValue::String(n.to_string())
            }
        }
        serde_json::Value::String(s) => GeneratedValue::String(s.clone()),
        serde_json::Value::Array(arr) => {
            GeneratedValue::Array(arr.iter().map(json_to_generated_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let values: BTreeMap<String, GeneratedValue> = obj
                .iter()
                .map(|(k, v)| (k.clone(), json_to_generated_value(v)))
                .collect();
            GeneratedValue::Object(values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_null() {
        assert_eq!(json_to_generated_value(&json!(null)), GeneratedValue::Null);
    }

    #[test]
    fn test_json_numbers() {
        assert_eq!(json_to_generated_value(&json!(42)), GeneratedValue::Int64(42));
        assert_eq!(json_to_generated_value(&json!(2.5)), GeneratedValue::Float64(2.5));
        assert_eq!(
            json_to_generated_value(&json!(u64::MAX)),
            GeneratedValue::Float64(u64::MAX as f64)
        );
    }

    #[test]
    fn test_json_containers() {
        assert_eq!(
            json_to_generated_value(&json!([])),
            GeneratedValue::Array(vec![])
        );
        assert_eq!(
            json_to_generated_value(&json!({"a": "b", "c": [true]})),
            GeneratedValue::Object(BTreeMap::from([
                ("a".to_string(), GeneratedValue::String("b".to_string())),
                (
                    "c".to_string(),
                    GeneratedValue::Array(vec![GeneratedValue::Bool(true)])
                ),
            ]))
        );
    }
}
