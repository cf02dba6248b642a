//! Field resolution for a single parameter object in a single context.

use tracing::trace;

use crate::meta::{Context, FieldDecl, PathDecl};
use crate::params::{FieldValue, Parameters};
use crate::{Error, Result};

/// A field that contributes to the payload in the active context.
#[derive(Debug)]
pub struct ResolvedField<'a> {
    /// Metadata of the field.
    pub field: &'static FieldDecl,
    /// The declaration that applied.
    pub path: &'static PathDecl,
    /// The field's value; never [`FieldValue::Absent`].
    pub value: FieldValue<'a>,
}

/// Outcome of looking at one field in one context.
pub(crate) enum Presence<'a> {
    /// No declaration for this context.
    Invisible,
    /// Declared but absent and optional.
    Omitted,
    /// Declared, absent, and required.
    Missing(&'static PathDecl),
    /// Declared and present.
    Present(&'static PathDecl, FieldValue<'a>),
}

/// Look at the field at `index` of `params` in `context`.
pub(crate) fn presence<'a>(
    params: &'a dyn Parameters,
    index: usize,
    field: &'static FieldDecl,
    context: Context,
) -> Result<Presence<'a>> {
    let Some(path) = field.path_for(context) else {
        return Ok(Presence::Invisible);
    };
    let value = params.field_value(index)?;
    if !value.is_absent() {
        return Ok(Presence::Present(path, value));
    }
    if path.necessity.is_required() {
        Ok(Presence::Missing(path))
    } else {
        Ok(Presence::Omitted)
    }
}

/// Resolve every field of `params` that applies in `context`, in declaration order.
///
/// Fields without a declaration for `context` and absent optional fields
/// are skipped.
///
/// # Errors
///
/// Returns [`Error::MissingRequiredField`] for the first required field
/// without a value, or any error raised while reading field values.
pub fn resolve_fields(params: &dyn Parameters, context: Context) -> Result<Vec<ResolvedField<'_>>> {
    let schema = params.schema();
    let mut resolved = Vec::with_capacity(schema.fields.len());

    for (index, field) in schema.fields.iter().enumerate() {
        match presence(params, index, field, context)? {
            Presence::Invisible => {
                trace!(
                    param_type = %schema.param_type,
                    field = field.name,
                    %context,
                    "field has no path in context"
                );
            }
            Presence::Omitted => {
                trace!(
                    param_type = %schema.param_type,
                    field = field.name,
                    %context,
                    "optional field absent"
                );
            }
            Presence::Missing(_) => {
                return Err(Error::missing_required_field(
                    schema.param_type,
                    field.name,
                    context,
                ));
            }
            Presence::Present(path, value) => resolved.push(ResolvedField { field, path, value }),
        }
    }

    Ok(resolved)
}
