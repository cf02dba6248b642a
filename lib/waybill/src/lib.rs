//! Shipping API client SDK with declarative, context-sensitive request
//! parameters.
//!
//! Parameter objects declare, per field, the key path the value takes when
//! the object is the request root and when it is nested inside another
//! parameter object. Building a request resolves every field against its
//! context, checks required fields, and assembles the nested payload.
//!
//! # Example
//!
//! ```ignore
//! use waybill::prelude::*;
//!
//! #[derive(Debug, Default, Parameters)]
//! pub struct CreateAddress {
//!     #[param(path = "address.street1", required)]
//!     #[param(parent = CreateShipment, path = "street1", required)]
//!     pub street1: Option<String>,
//!
//!     #[param(path = "verify")]
//!     pub verify: Option<bool>,
//! }
//!
//! let address = CreateAddress {
//!     street1: Some("388 Townsend St".into()),
//!     verify: Some(true),
//! };
//! let payload = build_payload(&address)?;
//! // {"address": {"street1": "388 Townsend St"}, "verify": true}
//! ```
//!
//! The [`params`] module declares the parameter objects of the shipping
//! API, and [`services`] wraps its endpoints.

extern crate self as waybill;

mod client;
mod config;
mod connector;
pub mod middleware;
pub mod models;
pub mod params;
pub mod prelude;
pub mod services;
mod shipping_client;

pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use shipping_client::ShippingClient;

// Re-export tower for middleware composition
pub use tower;
pub use url;

// Re-export core types
pub use waybill_core::{
    ApiClient, Context, Error, FieldDecl, FieldKind, FieldValue, HttpClient, JSON_CONTENT_TYPE,
    Method, MissingField, Necessity, ParamSchema, ParamType, ParameterType, Parameters,
    PathContext, PathDecl, Payload, Request, RequestBuilder, ResolvedField, Response, Result,
    build_in_context, build_payload, check_required, from_json, insert_at, missing_required_fields,
    resolve_fields, to_json, to_query_pairs, unwrap_path, wrap,
};

// Re-export http types for status codes and headers
pub use waybill_core::{StatusCode, header};

// Re-export the derive macro
pub use waybill_macro::Parameters;
