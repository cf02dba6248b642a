use crate::Parameters;

use super::{CreateOrder, CreateShipment};

/// Parameters of an address.
///
/// `verify` and `verify_strict` only exist when the address is created on
/// its own; they are dropped when the address is nested.
///
/// # Example
///
/// ```ignore
/// use waybill::params::CreateAddress;
///
/// let address = CreateAddress::new("388 Townsend St")
///     .city("San Francisco")
///     .state("CA")
///     .zip("94107");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Parameters)]
pub struct CreateAddress {
    /// Name of the person.
    #[param(path = "address.name")]
    #[param(parent = CreateShipment, path = "name")]
    #[param(parent = CreateOrder, path = "name")]
    pub name: Option<String>,

    /// Name of the organization.
    #[param(path = "address.company")]
    #[param(parent = CreateShipment, path = "company")]
    #[param(parent = CreateOrder, path = "company")]
    pub company: Option<String>,

    /// First line of the address.
    #[param(path = "address.street1", required)]
    #[param(parent = CreateShipment, path = "street1", required)]
    #[param(parent = CreateOrder, path = "street1", required)]
    pub street1: Option<String>,

    /// Second line of the address.
    #[param(path = "address.street2")]
    #[param(parent = CreateShipment, path = "street2")]
    #[param(parent = CreateOrder, path = "street2")]
    pub street2: Option<String>,

    /// City.
    #[param(path = "address.city")]
    #[param(parent = CreateShipment, path = "city")]
    #[param(parent = CreateOrder, path = "city")]
    pub city: Option<String>,

    /// State or province.
    #[param(path = "address.state")]
    #[param(parent = CreateShipment, path = "state")]
    #[param(parent = CreateOrder, path = "state")]
    pub state: Option<String>,

    /// ZIP or postal code.
    #[param(path = "address.zip")]
    #[param(parent = CreateShipment, path = "zip")]
    #[param(parent = CreateOrder, path = "zip")]
    pub zip: Option<String>,

    /// ISO 3166 country code.
    #[param(path = "address.country")]
    #[param(parent = CreateShipment, path = "country")]
    #[param(parent = CreateOrder, path = "country")]
    pub country: Option<String>,

    /// Phone number.
    #[param(path = "address.phone")]
    #[param(parent = CreateShipment, path = "phone")]
    #[param(parent = CreateOrder, path = "phone")]
    pub phone: Option<String>,

    /// Email address.
    #[param(path = "address.email")]
    #[param(parent = CreateShipment, path = "email")]
    #[param(parent = CreateOrder, path = "email")]
    pub email: Option<String>,

    /// Verify the address on creation.
    #[param(path = "verify")]
    pub verify: Option<bool>,

    /// Verify the address and reject it if verification fails.
    #[param(path = "verify_strict")]
    pub verify_strict: Option<bool>,
}

impl CreateAddress {
    /// An address with its first street line set.
    #[must_use]
    pub fn new(street1: impl Into<String>) -> Self {
        Self {
            street1: Some(street1.into()),
            ..Self::default()
        }
    }

    /// Set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the company.
    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the second street line.
    #[must_use]
    pub fn street2(mut self, street2: impl Into<String>) -> Self {
        self.street2 = Some(street2.into());
        self
    }

    /// Set the city.
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the state.
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the ZIP code.
    #[must_use]
    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    /// Set the country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Ask for verification on creation.
    #[must_use]
    pub const fn verify(mut self, verify: bool) -> Self {
        self.verify = Some(verify);
        self
    }

    /// Ask for strict verification on creation.
    #[must_use]
    pub const fn verify_strict(mut self, verify_strict: bool) -> Self {
        self.verify_strict = Some(verify_strict);
        self
    }
}
