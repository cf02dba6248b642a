//! Thin async wrappers over the shipping API endpoints.
//!
//! Every call builds its parameter object before touching the network, so
//! a missing required field fails without a request being sent.
//!
//! # Example
//!
//! ```ignore
//! use waybill::prelude::*;
//! use waybill::params::{CreateAddress, CreateParcel, CreateShipment};
//!
//! let client = ShippingClient::new()?;
//! let shipment = client
//!     .shipments()
//!     .create(&CreateShipment::new(
//!         CreateAddress::new("388 Townsend St"),
//!         CreateAddress::new("179 N Harbor Dr"),
//!         CreateParcel::weighing(65.9),
//!     ))
//!     .await?;
//! ```

use crate::models::{Address, Order, Shipment, ShipmentCollection};
use crate::params::{CreateAddress, CreateOrder, CreateShipment, ListShipments};
use crate::{ApiClient, Method, Result, wrap};

/// Endpoint groups of the shipping API, available on every [`ApiClient`].
pub trait ShippingApi: ApiClient {
    /// The `/addresses` endpoints.
    fn addresses(&self) -> Addresses<'_, Self> {
        Addresses { client: self }
    }

    /// The `/shipments` endpoints.
    fn shipments(&self) -> Shipments<'_, Self> {
        Shipments { client: self }
    }

    /// The `/orders` endpoints.
    fn orders(&self) -> Orders<'_, Self> {
        Orders { client: self }
    }
}

impl<C: ApiClient> ShippingApi for C {}

/// The `/addresses` endpoints.
#[derive(Debug)]
pub struct Addresses<'a, C: ?Sized> {
    client: &'a C,
}

impl<C: ApiClient> Addresses<'_, C> {
    /// Create an address, optionally verifying it.
    pub async fn create(&self, params: &CreateAddress) -> Result<Address> {
        self.client.send(Method::Post, &["addresses"], params).await
    }

    /// Retrieve an address by ID.
    pub async fn retrieve(&self, id: &str) -> Result<Address> {
        self.client.call(Method::Get, &["addresses", id]).await
    }
}

/// The `/shipments` endpoints.
#[derive(Debug)]
pub struct Shipments<'a, C: ?Sized> {
    client: &'a C,
}

impl<C: ApiClient> Shipments<'_, C> {
    /// Create a shipment and fetch its rates.
    pub async fn create(&self, params: &CreateShipment) -> Result<Shipment> {
        self.client.send(Method::Post, &["shipments"], params).await
    }

    /// Retrieve a shipment by ID.
    pub async fn retrieve(&self, id: &str) -> Result<Shipment> {
        self.client.call(Method::Get, &["shipments", id]).await
    }

    /// List shipments, one page at a time.
    pub async fn list(&self, params: &ListShipments) -> Result<ShipmentCollection> {
        self.client.send(Method::Get, &["shipments"], params).await
    }

    /// Buy a shipment at one of its rates.
    pub async fn buy(&self, id: &str, rate_id: &str) -> Result<Shipment> {
        let payload = wrap(rate_id, &["rate", "id"])?;
        self.client.send_payload(Method::Post, &["shipments", id, "buy"], &payload).await
    }
}

/// The `/orders` endpoints.
#[derive(Debug)]
pub struct Orders<'a, C: ?Sized> {
    client: &'a C,
}

impl<C: ApiClient> Orders<'_, C> {
    /// Create an order with its shipments.
    pub async fn create(&self, params: &CreateOrder) -> Result<Order> {
        self.client.send(Method::Post, &["orders"], params).await
    }

    /// Retrieve an order by ID.
    pub async fn retrieve(&self, id: &str) -> Result<Order> {
        self.client.call(Method::Get, &["orders", id]).await
    }
}
