//! Error types for waybill.
//!
//! Build-time failures (missing required fields, structural collisions,
//! malformed wrap arguments, invalid schemas) are raised on the client
//! before any request leaves the process. They are deterministic: retrying
//! a build with the same parameter object can never succeed.

use derive_more::{Display, Error, From};

use crate::meta::{Context, ParamType};

/// Main error type for waybill operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A field declared `required` for the active context has no value.
    #[display("missing required field `{field}` on {owner} ({context})")]
    #[from(skip)]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
        /// Parameter type owning the field.
        owner: ParamType,
        /// Context the field was resolved in.
        context: Context,
    },

    /// [`crate::wrap`] was called with an empty key sequence.
    #[display("malformed wrap arguments: key sequence must not be empty")]
    #[from(skip)]
    MalformedWrap,

    /// Two declarations placed incompatible value shapes on the same path.
    #[display("structural collision at `{path}`: {reason}")]
    #[from(skip)]
    StructuralCollision {
        /// Dotted path where the collision happened.
        path: String,
        /// What collided.
        reason: &'static str,
    },

    /// Path metadata rejected at registration time.
    #[display("invalid parameter schema: {_0}")]
    #[from(skip)]
    InvalidSchema(#[error(not(source))] String),

    /// HTTP-level errors (non-2xx status codes).
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "shipment.to_address.zip").
        path: String,
        /// Error message.
        message: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a missing-required-field error.
    #[must_use]
    pub const fn missing_required_field(
        owner: ParamType,
        field: &'static str,
        context: Context,
    ) -> Self {
        Self::MissingRequiredField {
            field,
            owner,
            context,
        }
    }

    /// Create a structural collision error.
    #[must_use]
    pub fn structural_collision(path: impl Into<String>, reason: &'static str) -> Self {
        Self::StructuralCollision {
            path: path.into(),
            reason,
        }
    }

    /// Create an invalid schema error.
    #[must_use]
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema(message.into())
    }

    /// Create an HTTP error from status code and message.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http_with_body(status: u16, message: impl Into<String>, body: bytes::Bytes) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the error was raised while building a payload,
    /// i.e. before any network call.
    #[must_use]
    pub const fn is_build_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredField { .. }
                | Self::MalformedWrap
                | Self::StructuralCollision { .. }
                | Self::InvalidSchema(_)
        )
    }

    /// Name of the missing field if this is a missing-required-field error.
    #[must_use]
    pub const fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Try to decode the HTTP error body as JSON.
    ///
    /// Returns `None` if there is no body or this is not an HTTP error.
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}
