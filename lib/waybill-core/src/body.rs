//! JSON body encoding and decoding.

use bytes::Bytes;

use crate::Result;

/// MIME type of every body waybill sends.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use waybill_core::to_json;
///
/// let bytes = to_json(&json!({ "address": { "zip": "94107" } })).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"address":{"zip":"94107"}}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes with path-aware error messages.
///
/// Errors name the exact path of the offending field
/// (e.g. `shipment.to_address.zip`).
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if decoding fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
