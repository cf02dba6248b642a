//! Core of the waybill shipping SDK.
//!
//! The heart of this crate is a declarative parameter-serialization
//! engine. Parameter objects declare, per field, where their value lands in
//! the request payload and whether it is required. Declarations depend on
//! the *resolution context*: the same address is written under
//! `address.street1` when it is the request root, and under `street1` when
//! it is nested inside a shipment.
//!
//! - [`Necessity`], [`PathDecl`], [`ParamSchema`] - static path metadata
//! - [`Parameters`] and [`ParameterType`] - the parameter object contract
//! - [`Context`] - the resolution context threaded through a build
//! - [`resolve_fields`] - field resolution for one object in one context
//! - [`build_payload`] - recursive payload construction
//! - [`missing_required_fields`] and [`check_required`] - diagnostics
//! - [`wrap`] - flat-to-nested wrapping
//! - [`to_query_pairs`] - payload flattening for read requests
//! - [`Request`], [`Response`], [`HttpClient`], [`ApiClient`] - the HTTP boundary
//! - [`Error`] and [`Result`] - error handling

mod body;
mod client;
mod error;
mod meta;
mod method;
mod params;
mod payload;
pub mod prelude;
mod query;
mod request;
mod resolve;
mod response;
mod validate;
mod wrap;

#[cfg(test)]
mod test_support;

pub use body::{JSON_CONTENT_TYPE, from_json, to_json};
pub use client::{ApiClient, HttpClient};
pub use error::{Error, Result};
pub use meta::{Context, FieldDecl, FieldKind, Necessity, ParamSchema, ParamType, PathContext, PathDecl};
pub use method::Method;
pub use params::{FieldValue, ParameterType, Parameters};
pub use payload::{Payload, build_in_context, build_payload, insert_at};
pub use query::to_query_pairs;
pub use request::{Request, RequestBuilder};
pub use resolve::{ResolvedField, resolve_fields};
pub use response::Response;
pub use validate::{MissingField, check_required, missing_required_fields};
pub use wrap::{unwrap_path, wrap};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
