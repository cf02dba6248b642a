//! The shipping API client.
//!
//! [`ShippingClient`] pairs an [`HttpClient`] with the API base URL. It is
//! the [`ApiClient`] the service wrappers in [`crate::services`] call
//! through.

use std::future::Future;

use bytes::Bytes;
use url::Url;

use crate::{ApiClient, ClientConfig, Error, HttpClient, HyperClient, Request, Response, Result};

/// Client for the shipping API.
///
/// Cloning is cheap: clones share the transport and its connection pool.
///
/// # Example
///
/// ```ignore
/// use waybill::{ClientConfig, ShippingClient};
///
/// // Production endpoint, default transport
/// let client = ShippingClient::new()?;
///
/// // Any other transport, e.g. a mock
/// let client = ShippingClient::from_parts(recorder, "http://localhost:8080/v2".parse()?);
/// ```
#[derive(Debug)]
pub struct ShippingClient<C = HyperClient> {
    http: C,
    base_url: Url,
}

impl<C: Clone> Clone for ShippingClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl ShippingClient {
    /// Create a client for the production endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `config.base_url` cannot be parsed.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(Error::InvalidUrl)?;
        Ok(Self::from_parts(HyperClient::with_config(config), base_url))
    }
}

impl<C> ShippingClient<C> {
    /// Create a client from a transport and a base URL.
    #[must_use]
    pub const fn from_parts(http: C, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn http(&self) -> &C {
        &self.http
    }

    /// Consume the client and return the transport.
    #[must_use]
    pub fn into_http(self) -> C {
        self.http
    }
}

impl<C> ApiClient for ShippingClient<C>
where
    C: HttpClient + Clone,
{
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        self.http.execute(request)
    }

    fn base_url(&self) -> &Url {
        &self.base_url
    }
}
