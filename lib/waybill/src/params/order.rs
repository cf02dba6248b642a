use crate::Parameters;

use super::{CreateAddress, CreateShipment};

/// Parameters of an order: several shipments between the same addresses.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct CreateOrder {
    /// Destination of every shipment.
    #[param(nested, path = "order.to_address", required)]
    pub to_address: Option<CreateAddress>,

    /// Origin of every shipment.
    #[param(nested, path = "order.from_address", required)]
    pub from_address: Option<CreateAddress>,

    /// Shipments of the order, one per parcel.
    #[param(nested, path = "order.shipments", required)]
    pub shipments: Vec<CreateShipment>,

    /// Caller reference, echoed back by the API.
    #[param(path = "order.reference")]
    pub reference: Option<String>,
}

impl CreateOrder {
    /// An order between two addresses, without shipments yet.
    #[must_use]
    pub fn new(to_address: CreateAddress, from_address: CreateAddress) -> Self {
        Self {
            to_address: Some(to_address),
            from_address: Some(from_address),
            ..Self::default()
        }
    }

    /// Add a shipment.
    #[must_use]
    pub fn shipment(mut self, shipment: CreateShipment) -> Self {
        self.shipments.push(shipment);
        self
    }

    /// Set the caller reference.
    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}
