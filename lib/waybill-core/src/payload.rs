//! Recursive payload construction.
//!
//! A build starts at the root context and descends into nested parameter
//! objects, switching the context to the type of the immediately
//! enclosing object at every level. Each resolved value is inserted at its
//! key path; intermediate mappings are created on demand.
//!
//! # Collisions
//!
//! | existing | incoming | outcome |
//! |----------|----------|---------|
//! | mapping | mapping | deep merge |
//! | mapping | terminal | [`Error::StructuralCollision`] |
//! | terminal | mapping | [`Error::StructuralCollision`] |
//! | terminal | terminal | the later field wins |
//!
//! A terminal value found where an intermediate mapping is needed is also a
//! structural collision.

use serde_json::{Map, Value};
use tracing::debug;

use crate::meta::Context;
use crate::params::{FieldValue, Parameters};
use crate::resolve::resolve_fields;
use crate::{Error, Result};

/// The nested key/value tree produced by a build.
///
/// Keys keep insertion order, which follows field declaration order.
pub type Payload = Map<String, Value>;

/// Build the payload of a request-root parameter object.
///
/// # Errors
///
/// Fails on the first required field without a value, anywhere in the
/// nested structure, and on structural collisions. No partial payload is
/// returned.
///
/// # Example
///
/// ```ignore
/// let payload = waybill_core::build_payload(&address)?;
/// assert_eq!(payload["address"]["street1"], "388 Townsend St");
/// ```
pub fn build_payload(params: &dyn Parameters) -> Result<Payload> {
    let payload = build_in_context(params, Context::Root)?;
    debug!(
        param_type = %params.param_type(),
        fields = payload.len(),
        "payload built"
    );
    Ok(payload)
}

/// Build the payload of `params` as seen in `context`.
///
/// # Errors
///
/// Same as [`build_payload`].
pub fn build_in_context(params: &dyn Parameters, context: Context) -> Result<Payload> {
    let owner = params.param_type();
    let mut payload = Payload::new();

    for resolved in resolve_fields(params, context)? {
        let value = match resolved.value {
            FieldValue::Absent => continue,
            FieldValue::Value(value) => value,
            FieldValue::Nested(nested) => {
                Value::Object(build_in_context(nested, Context::NestedIn(owner))?)
            }
            FieldValue::NestedList(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| build_in_context(item, Context::NestedIn(owner)).map(Value::Object))
                    .collect::<Result<_>>()?,
            ),
        };
        insert_at(&mut payload, resolved.path.keys, value)?;
    }

    Ok(payload)
}

/// Insert `value` at `keys`, creating intermediate mappings as needed.
///
/// # Errors
///
/// Returns [`Error::StructuralCollision`] when a terminal value is in the
/// way of the path or the leaf shapes cannot be merged.
pub fn insert_at(payload: &mut Payload, keys: &[&str], value: Value) -> Result<()> {
    let Some((leaf, parents)) = keys.split_last() else {
        return Err(Error::invalid_schema("cannot insert at an empty path"));
    };

    let mut current = payload;
    for (depth, key) in parents.iter().enumerate() {
        let slot = current
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(next) = slot else {
            return Err(Error::structural_collision(
                dotted(keys.iter().take(depth + 1)),
                "a terminal value sits on an intermediate key",
            ));
        };
        current = next;
    }

    match current.get_mut(*leaf) {
        None => {
            current.insert((*leaf).to_string(), value);
            Ok(())
        }
        Some(existing) => merge_value(existing, value, keys.iter().copied().collect()),
    }
}

fn merge_value(existing: &mut Value, incoming: Value, path: Vec<&str>) -> Result<()> {
    match (existing, incoming) {
        (Value::Object(existing), Value::Object(incoming)) => merge_into(existing, incoming, &path),
        (Value::Object(_), _) | (_, Value::Object(_)) => Err(Error::structural_collision(
            path.join("."),
            "a mapping and a terminal value share a key",
        )),
        (existing, incoming) => {
            debug!(path = %path.join("."), "terminal value overwritten by a later field");
            *existing = incoming;
            Ok(())
        }
    }
}

fn merge_into(existing: &mut Payload, incoming: Payload, path: &[&str]) -> Result<()> {
    for (key, value) in incoming {
        match existing.get_mut(&key) {
            None => {
                existing.insert(key, value);
            }
            Some(slot) => {
                let mut nested = path.to_vec();
                nested.push(&key);
                merge_value(slot, value, nested)?;
            }
        }
    }
    Ok(())
}

fn dotted<'k>(keys: impl Iterator<Item = &'k &'k str>) -> String {
    keys.copied().collect::<Vec<_>>().join(".")
}
