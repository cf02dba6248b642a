//! Required-field diagnostics.
//!
//! Builds stop at the first missing required field. The functions here walk
//! the same traversal without building anything, which is useful to report
//! every problem of a parameter object at once.

use std::fmt;

use crate::meta::{Context, ParamType};
use crate::params::{FieldValue, Parameters};
use crate::resolve::{Presence, presence};
use crate::{Error, Result};

/// A required field without a value, found by [`missing_required_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    /// Parameter type owning the field.
    pub owner: ParamType,
    /// Field name.
    pub field: &'static str,
    /// Context the field was resolved in.
    pub context: Context,
    /// Path the value would have been written to, relative to its owner.
    pub path: &'static [&'static str],
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} ({}) at `{}`",
            self.owner,
            self.field,
            self.context,
            self.path.join(".")
        )
    }
}

impl From<MissingField> for Error {
    fn from(missing: MissingField) -> Self {
        Self::missing_required_field(missing.owner, missing.field, missing.context)
    }
}

/// Collect every required field without a value, across the whole nested structure.
///
/// Fields are reported in build order.
///
/// # Errors
///
/// Only errors raised while reading field values are returned; missing
/// fields are part of the `Ok` result.
pub fn missing_required_fields(params: &dyn Parameters) -> Result<Vec<MissingField>> {
    let mut missing = Vec::new();
    collect(params, Context::Root, &mut missing)?;
    Ok(missing)
}

/// Check that every required field is set, without building a payload.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] for the first missing field, the
/// same one a build would report.
pub fn check_required(params: &dyn Parameters) -> Result<()> {
    match missing_required_fields(params)?.into_iter().next() {
        Some(missing) => Err(missing.into()),
        None => Ok(()),
    }
}

fn collect(params: &dyn Parameters, context: Context, missing: &mut Vec<MissingField>) -> Result<()> {
    let schema = params.schema();
    let mut children = Vec::new();

    // Own fields first, then descend: the order a build reports them in.
    for (index, field) in schema.fields.iter().enumerate() {
        match presence(params, index, field, context)? {
            Presence::Missing(path) => missing.push(MissingField {
                owner: schema.param_type,
                field: field.name,
                context,
                path: path.keys,
            }),
            Presence::Present(_, FieldValue::Nested(nested)) => children.push(nested),
            Presence::Present(_, FieldValue::NestedList(items)) => children.extend(items),
            Presence::Invisible | Presence::Omitted | Presence::Present(..) => {}
        }
    }

    let nested_context = Context::NestedIn(schema.param_type);
    for child in children {
        collect(child, nested_context, missing)?;
    }
    Ok(())
}
