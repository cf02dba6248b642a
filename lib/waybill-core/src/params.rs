//! The parameter object contract.
//!
//! A parameter object exposes its `'static` [`ParamSchema`] and hands out
//! each declared field's current value on request. The engine only ever
//! reads through `&self`; parameter objects are never mutated by a build.
//!
//! Implementations are normally generated by `#[derive(Parameters)]`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::Result;
use crate::meta::{ParamSchema, ParamType};

/// A typed bundle of fields that can be built into a payload.
///
/// This trait is object safe: the payload builder walks nested objects as
/// `&dyn Parameters`.
pub trait Parameters {
    /// Metadata of this type.
    fn schema(&self) -> &'static ParamSchema;

    /// Current value of the field at `index` in [`ParamSchema::fields`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized, or if `index`
    /// is not a declared field.
    fn field_value(&self, index: usize) -> Result<FieldValue<'_>>;

    /// Identity of this type.
    fn param_type(&self) -> ParamType {
        self.schema().param_type
    }
}

/// Compile-time identity and metadata of a parameter object type.
///
/// Other types refer to `<T as ParameterType>::PARAM_TYPE` to declare
/// paths used when they are nested inside `T`.
pub trait ParameterType: Parameters {
    /// Identity of the type.
    const PARAM_TYPE: ParamType;
    /// Metadata of the type.
    const SCHEMA: &'static ParamSchema;
    /// Evaluating this fails compilation when [`Self::SCHEMA`] is malformed.
    const WELL_FORMED: () = Self::SCHEMA.assert_well_formed();
}

impl<P: Parameters + ?Sized> Parameters for Box<P> {
    fn schema(&self) -> &'static ParamSchema {
        (**self).schema()
    }

    fn field_value(&self, index: usize) -> Result<FieldValue<'_>> {
        (**self).field_value(index)
    }
}

/// Value of one field, as seen by the field resolver.
pub enum FieldValue<'a> {
    /// The caller did not set the field.
    Absent,
    /// A terminal value, already serialized.
    Value(Value),
    /// A nested parameter object, resolved recursively.
    Nested(&'a dyn Parameters),
    /// A sequence of nested parameter objects, each resolved recursively.
    NestedList(Vec<&'a dyn Parameters>),
}

impl<'a> FieldValue<'a> {
    /// Serialize a terminal value.
    pub fn scalar<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Value(serde_json::to_value(value)?))
    }

    /// Serialize a terminal value, or [`FieldValue::Absent`] for `None`.
    pub fn optional_scalar<T: Serialize>(value: Option<&T>) -> Result<Self> {
        value.map_or(Ok(Self::Absent), Self::scalar)
    }

    /// A nested parameter object.
    #[must_use]
    pub fn nested<P: Parameters>(value: &'a P) -> Self {
        Self::Nested(value)
    }

    /// A nested parameter object, or [`FieldValue::Absent`] for `None`.
    #[must_use]
    pub fn optional_nested<P: Parameters>(value: Option<&'a P>) -> Self {
        value.map_or(Self::Absent, Self::nested)
    }

    /// A sequence of nested parameter objects.
    #[must_use]
    pub fn nested_list<P: Parameters>(values: &'a [P]) -> Self {
        Self::NestedList(
            values
                .iter()
                .map(|value| value as &dyn Parameters)
                .collect(),
        )
    }

    /// A sequence of nested parameter objects, or [`FieldValue::Absent`] for `None`.
    #[must_use]
    pub fn optional_nested_list<P: Parameters>(values: Option<&'a [P]>) -> Self {
        values.map_or(Self::Absent, Self::nested_list)
    }

    /// Returns `true` for [`FieldValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Nested(params) => f
                .debug_tuple("Nested")
                .field(&params.param_type())
                .finish(),
            Self::NestedList(params) => f
                .debug_tuple("NestedList")
                .field(&params.iter().map(|p| p.param_type()).collect::<Vec<_>>())
                .finish(),
        }
    }
}
