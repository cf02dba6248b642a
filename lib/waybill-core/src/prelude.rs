//! Prelude module for convenient imports.
//!
//! ```ignore
//! use waybill_core::prelude::*;
//! ```

pub use crate::{
    ApiClient, Context, Error, FieldValue, HttpClient, Method, Necessity, ParameterType,
    Parameters, Payload, Request, RequestBuilder, Response, Result, build_payload, wrap,
};
