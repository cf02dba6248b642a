//! Request parameter objects of the shipping API.
//!
//! Each type declares where its fields land in every context it can be
//! built in: at the request root, or nested inside one of its consumers.
//! An address, for instance, is wrapped under `address` when it is the
//! request itself, but contributes bare keys when it sits inside a
//! shipment or an order.

mod address;
mod order;
mod parcel;
mod shipment;

pub use address::CreateAddress;
pub use order::CreateOrder;
pub use parcel::CreateParcel;
pub use shipment::{CreateShipment, ListShipments};
