//! Flat-to-nested wrapping.
//!
//! Some endpoints take a value that is already fully formed (an identifier,
//! a pre-built mapping) and only need it placed under one or more keys.

use serde_json::Value;

use crate::payload::Payload;
use crate::{Error, Result};

/// Place `value` under the key sequence `keys`, outermost first.
///
/// `wrap("adr_123", &["shipment", "to_address", "id"])` produces
/// `{"shipment": {"to_address": {"id": "adr_123"}}}`.
///
/// # Errors
///
/// Returns [`Error::MalformedWrap`] if `keys` is empty.
pub fn wrap(value: impl Into<Value>, keys: &[&str]) -> Result<Payload> {
    let Some((outer, inner)) = keys.split_first() else {
        return Err(Error::MalformedWrap);
    };

    let value: Value = value.into();
    let value = inner.iter().rev().fold(value, |value, key| {
        let mut map = Payload::new();
        map.insert((*key).to_string(), value);
        Value::Object(map)
    });

    let mut payload = Payload::new();
    payload.insert((*outer).to_string(), value);
    Ok(payload)
}

/// Follow `keys` down a nested value.
///
/// Returns `None` as soon as a key is missing or a non-mapping is reached.
#[must_use]
pub fn unwrap_path<'v>(value: &'v Value, keys: &[&str]) -> Option<&'v Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}
