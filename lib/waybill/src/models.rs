//! Response objects of the shipping API.
//!
//! Only the fields the SDK reads are modelled; unknown fields are ignored.

use serde::Deserialize;

/// A stored address.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    /// Object ID, `adr_...`.
    pub id: String,
    /// Name of the person.
    pub name: Option<String>,
    /// Name of the organization.
    pub company: Option<String>,
    /// First line of the address.
    pub street1: Option<String>,
    /// Second line of the address.
    pub street2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// ZIP or postal code.
    pub zip: Option<String>,
    /// ISO 3166 country code.
    pub country: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

/// A stored parcel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parcel {
    /// Object ID, `prcl_...`.
    pub id: String,
    /// Length in inches.
    pub length: Option<f64>,
    /// Width in inches.
    pub width: Option<f64>,
    /// Height in inches.
    pub height: Option<f64>,
    /// Carrier package name.
    pub predefined_package: Option<String>,
    /// Weight in ounces.
    pub weight: f64,
}

/// A carrier rate for a shipment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rate {
    /// Object ID, `rate_...`.
    pub id: String,
    /// Carrier name, e.g. `USPS`.
    pub carrier: String,
    /// Service level, e.g. `Priority`.
    pub service: String,
    /// Price, as a decimal string.
    pub rate: String,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// A shipment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shipment {
    /// Object ID, `shp_...`.
    pub id: String,
    /// Caller reference.
    pub reference: Option<String>,
    /// Lifecycle status, e.g. `unknown`, `delivered`.
    pub status: Option<String>,
    /// Carrier tracking code, once bought.
    pub tracking_code: Option<String>,
    /// Destination.
    pub to_address: Option<Address>,
    /// Origin.
    pub from_address: Option<Address>,
    /// What is shipped.
    pub parcel: Option<Parcel>,
    /// Rates offered for this shipment.
    #[serde(default)]
    pub rates: Vec<Rate>,
    /// The rate bought, if any.
    pub selected_rate: Option<Rate>,
}

/// One page of shipments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShipmentCollection {
    /// Shipments of the page.
    pub shipments: Vec<Shipment>,
    /// More pages follow.
    pub has_more: bool,
}

impl ShipmentCollection {
    /// ID of the last shipment of the page, to request the next one.
    #[must_use]
    pub fn last_id(&self) -> Option<&str> {
        self.shipments.last().map(|shipment| shipment.id.as_str())
    }
}

/// An order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    /// Object ID, `order_...`.
    pub id: String,
    /// Caller reference.
    pub reference: Option<String>,
    /// Destination.
    pub to_address: Option<Address>,
    /// Origin.
    pub from_address: Option<Address>,
    /// Shipments of the order.
    #[serde(default)]
    pub shipments: Vec<Shipment>,
}
