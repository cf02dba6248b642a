use crate::Parameters;

use super::CreateShipment;

/// Parameters of a parcel.
///
/// Dimensions are in inches and weight in ounces. Either all three
/// dimensions or a predefined package should be given.
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct CreateParcel {
    /// Length in inches.
    #[param(path = "parcel.length")]
    #[param(parent = CreateShipment, path = "length")]
    pub length: Option<f64>,

    /// Width in inches.
    #[param(path = "parcel.width")]
    #[param(parent = CreateShipment, path = "width")]
    pub width: Option<f64>,

    /// Height in inches.
    #[param(path = "parcel.height")]
    #[param(parent = CreateShipment, path = "height")]
    pub height: Option<f64>,

    /// Carrier package name, e.g. `FlatRateEnvelope`.
    #[param(path = "parcel.predefined_package")]
    #[param(parent = CreateShipment, path = "predefined_package")]
    pub predefined_package: Option<String>,

    /// Weight in ounces.
    #[param(path = "parcel.weight", required)]
    #[param(parent = CreateShipment, path = "weight", required)]
    pub weight: Option<f64>,
}

impl CreateParcel {
    /// A parcel of the given weight.
    #[must_use]
    pub fn weighing(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Self::default()
        }
    }

    /// Set the three dimensions.
    #[must_use]
    pub const fn dimensions(mut self, length: f64, width: f64, height: f64) -> Self {
        self.length = Some(length);
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Use a predefined carrier package.
    #[must_use]
    pub fn predefined_package(mut self, package: impl Into<String>) -> Self {
        self.predefined_package = Some(package.into());
        self
    }
}
