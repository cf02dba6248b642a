//! Flattening of payloads into query parameters.
//!
//! Read requests carry their parameters in the query string. Nested keys
//! use bracket notation:
//!
//! | payload | pairs |
//! |---------|-------|
//! | `{"a": {"b": 1}}` | `a[b]=1` |
//! | `{"ids": ["x", "y"]}` | `ids[]=x`, `ids[]=y` |
//! | `{"items": [{"id": 1}]}` | `items[0][id]=1` |
//!
//! `null` values are dropped. Percent-encoding happens when the pairs are
//! appended to a URL.

use serde_json::Value;

use crate::payload::Payload;

/// Flatten `payload` into `(key, value)` pairs, in payload order.
#[must_use]
pub fn to_query_pairs(payload: &Payload) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in payload {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (inner, value) in map {
                flatten(format!("{key}[{inner}]"), value, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let item_key = if item.is_object() || item.is_array() {
                    format!("{key}[{index}]")
                } else {
                    format!("{key}[]")
                };
                flatten(item_key, item, pairs);
            }
        }
        Value::String(text) => pairs.push((key, text.clone())),
        Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
    }
}
