use jiff::Timestamp;

use crate::Parameters;

use super::{CreateAddress, CreateOrder, CreateParcel};

/// Parameters of a shipment.
///
/// Created on its own, a shipment needs both addresses and a parcel.
/// Inside an order, the addresses default to the order's and only the
/// parcel stays required.
///
/// # Example
///
/// ```ignore
/// use waybill::params::{CreateAddress, CreateParcel, CreateShipment};
///
/// let shipment = CreateShipment::new(
///     CreateAddress::new("179 N Harbor Dr"),
///     CreateAddress::new("388 Townsend St"),
///     CreateParcel::weighing(65.9),
/// )
/// .reference("order-1042");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct CreateShipment {
    /// Destination.
    #[param(nested, path = "shipment.to_address", required)]
    #[param(parent = CreateOrder, nested, path = "to_address")]
    pub to_address: Option<CreateAddress>,

    /// Origin.
    #[param(nested, path = "shipment.from_address", required)]
    #[param(parent = CreateOrder, nested, path = "from_address")]
    pub from_address: Option<CreateAddress>,

    /// What is shipped.
    #[param(nested, path = "shipment.parcel", required)]
    #[param(parent = CreateOrder, nested, path = "parcel", required)]
    pub parcel: Option<CreateParcel>,

    /// Caller reference, echoed back by the API.
    #[param(path = "shipment.reference")]
    #[param(parent = CreateOrder, path = "reference")]
    pub reference: Option<String>,

    /// Label file format (`PDF`, `PNG`, `ZPL`).
    #[param(path = "shipment.options.label_format")]
    #[param(parent = CreateOrder, path = "options.label_format")]
    pub label_format: Option<String>,

    /// Invoice number printed on the label.
    #[param(path = "shipment.options.invoice_number")]
    #[param(parent = CreateOrder, path = "options.invoice_number")]
    pub invoice_number: Option<String>,

    /// Date printed on the label, when it is not today.
    #[param(path = "shipment.options.label_date")]
    #[param(parent = CreateOrder, path = "options.label_date")]
    pub label_date: Option<Timestamp>,

    /// Carrier accounts to rate with; every account when unset.
    #[param(path = "shipment.carrier_accounts")]
    #[param(parent = CreateOrder, path = "carrier_accounts")]
    pub carrier_accounts: Option<Vec<String>>,
}

impl CreateShipment {
    /// A shipment between two addresses.
    #[must_use]
    pub fn new(to_address: CreateAddress, from_address: CreateAddress, parcel: CreateParcel) -> Self {
        Self {
            to_address: Some(to_address),
            from_address: Some(from_address),
            parcel: Some(parcel),
            ..Self::default()
        }
    }

    /// A shipment inheriting its addresses from an order.
    #[must_use]
    pub fn of_parcel(parcel: CreateParcel) -> Self {
        Self {
            parcel: Some(parcel),
            ..Self::default()
        }
    }

    /// Set the caller reference.
    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Set the label format.
    #[must_use]
    pub fn label_format(mut self, format: impl Into<String>) -> Self {
        self.label_format = Some(format.into());
        self
    }

    /// Set the invoice number.
    #[must_use]
    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = Some(invoice_number.into());
        self
    }

    /// Set the label date.
    #[must_use]
    pub const fn label_date(mut self, date: Timestamp) -> Self {
        self.label_date = Some(date);
        self
    }

    /// Restrict rating to one more carrier account.
    #[must_use]
    pub fn carrier_account(mut self, id: impl Into<String>) -> Self {
        self.carrier_accounts.get_or_insert_with(Vec::new).push(id.into());
        self
    }
}

/// Query parameters of the shipment listing.
///
/// Sent with `GET`, so the payload is flattened into the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parameters)]
pub struct ListShipments {
    /// Number of shipments per page.
    #[param(path = "page_size")]
    pub page_size: Option<u32>,

    /// Only shipments created before this ID.
    #[param(path = "before_id")]
    pub before_id: Option<String>,

    /// Only shipments created after this ID.
    #[param(path = "after_id")]
    pub after_id: Option<String>,

    /// Only shipments created at or after this instant.
    #[param(path = "start_datetime")]
    pub start_datetime: Option<Timestamp>,

    /// Only shipments created before this instant.
    #[param(path = "end_datetime")]
    pub end_datetime: Option<Timestamp>,

    /// Only purchased (or unpurchased) shipments.
    #[param(path = "purchased")]
    pub purchased: Option<bool>,

    /// Include return and child shipments.
    #[param(path = "include_children")]
    pub include_children: Option<bool>,

    /// Only shipments rated with these carriers.
    #[param(path = "carrier")]
    pub carriers: Option<Vec<String>>,
}

impl ListShipments {
    /// Set the page size.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Page backwards from `id`.
    #[must_use]
    pub fn before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    /// Page forwards from `id`.
    #[must_use]
    pub fn after_id(mut self, id: impl Into<String>) -> Self {
        self.after_id = Some(id.into());
        self
    }

    /// Filter on purchase status.
    #[must_use]
    pub const fn purchased(mut self, purchased: bool) -> Self {
        self.purchased = Some(purchased);
        self
    }

    /// Only shipments created at or after `start`.
    #[must_use]
    pub const fn start_datetime(mut self, start: Timestamp) -> Self {
        self.start_datetime = Some(start);
        self
    }

    /// Only shipments created before `end`.
    #[must_use]
    pub const fn end_datetime(mut self, end: Timestamp) -> Self {
        self.end_datetime = Some(end);
        self
    }

    /// Include return and child shipments.
    #[must_use]
    pub const fn include_children(mut self, include: bool) -> Self {
        self.include_children = Some(include);
        self
    }

    /// Filter on one more carrier.
    #[must_use]
    pub fn carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carriers.get_or_insert_with(Vec::new).push(carrier.into());
        self
    }
}
