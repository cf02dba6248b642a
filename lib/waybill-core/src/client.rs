//! HTTP client traits.
//!
//! - [`HttpClient`] - Low-level HTTP execution (the transport seam)
//! - [`ApiClient`] - Transport plus base URL, with typed calls that build
//!   parameter objects into requests
//!
//! Implement [`ApiClient`] directly for custom auth or testing.

use std::future::Future;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use crate::body::JSON_CONTENT_TYPE;
use crate::params::Parameters;
use crate::payload::Payload;
use crate::{Error, Method, Request, RequestBuilder, Response, Result};

/// Core HTTP client trait.
///
/// This trait defines the interface for executing HTTP requests.
/// Implementations should be async-first and support connection pooling.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// A client bound to an API base URL.
///
/// # Example
///
/// ```ignore
/// use waybill::{ApiClient, Method};
///
/// let shipment: Shipment = client.send(Method::Post, "shipments", &params).await?;
/// ```
pub trait ApiClient: Clone + Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;

    /// Get the base URL for this client.
    ///
    /// All API paths are resolved relative to this URL.
    fn base_url(&self) -> &Url;

    /// Append `segments` to the base URL, one path segment each.
    ///
    /// Segments are percent-encoded as a whole, so an identifier holding a
    /// `/` or `?` stays a single segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path, or if a
    /// segment is empty.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self.base_url();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::invalid_request(format!(
                "empty path segment in `{}`",
                segments.join("/")
            )));
        }
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::invalid_request(format!("cannot append a path to `{base}`")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build `params` into a request for `segments`, send it, and decode the
    /// JSON response.
    ///
    /// The payload goes into a JSON body for methods that carry one, and
    /// into the query string otherwise. Build errors are returned before
    /// any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a build error, a transport error, [`Error::Http`] for
    /// non-2xx responses, or a decoding error.
    fn send<T>(
        &self,
        method: Method,
        segments: &[&str],
        params: &dyn Parameters,
    ) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let request = self
            .endpoint(segments)
            .and_then(|url| json_request(method, url).params(params))
            .map(RequestBuilder::build);
        async move {
            let response = self.execute(request?).await?;
            response.error_for_status()?.json()
        }
    }

    /// Send an already built payload and decode the JSON response.
    ///
    /// Placement follows the same rule as [`ApiClient::send`]. Useful for
    /// payloads assembled with [`crate::wrap`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`].
    fn send_payload<T>(
        &self,
        method: Method,
        segments: &[&str],
        payload: &Payload,
    ) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let request = self
            .endpoint(segments)
            .and_then(|url| json_request(method, url).payload(payload))
            .map(RequestBuilder::build);
        async move {
            let response = self.execute(request?).await?;
            response.error_for_status()?.json()
        }
    }

    /// Send a request without parameters and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`], minus build errors.
    fn call<T>(&self, method: Method, segments: &[&str]) -> impl Future<Output = Result<T>> + Send
    where
        T: DeserializeOwned + Send,
    {
        let request = self
            .endpoint(segments)
            .map(|url| json_request(method, url).build());
        async move {
            let response = self.execute(request?).await?;
            response.error_for_status()?.json()
        }
    }
}

fn json_request(method: Method, url: Url) -> RequestBuilder<Bytes> {
    Request::builder(method, url).header("Accept", JSON_CONTENT_TYPE)
}
