//! Prelude module for convenient imports.
//!
//! ```ignore
//! use waybill::prelude::*;
//! ```

pub use crate::services::ShippingApi;
pub use crate::{
    ApiClient, ClientConfig, Context, Error, HttpClient, HyperClient, Method, Necessity,
    ParameterType, Parameters, Payload, Result, ShippingClient, build_payload, wrap,
};
