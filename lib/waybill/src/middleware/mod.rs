//! Tower middleware layers for the shipping client.
//!
//! Layers wrap the hyper transport and see every request the client sends.
//! Add them with [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer);
//! the first layer added is the outermost.
//!
//! # Example
//!
//! ```ignore
//! use waybill::HyperClient;
//! use waybill::middleware::{ConcurrencyLimitLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::debug())
//!     .layer(ConcurrencyLimitLayer::new(8))
//!     .build();
//! ```

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::{Layer, ServiceBuilder};
