//! Procedural macros for the waybill shipping SDK.
//!
//! This crate provides `#[derive(Parameters)]`, which registers the path
//! metadata of a parameter object at compile time.
//!
//! # Example
//!
//! ```ignore
//! use waybill::Parameters;
//!
//! #[derive(Parameters)]
//! pub struct CreateAddress {
//!     #[param(path = "address.street1", required)]
//!     #[param(parent = CreateShipment, path = "street1", required)]
//!     pub street1: Option<String>,
//!
//!     #[param(path = "verify")]
//!     pub verify: Option<bool>,
//! }
//! ```

mod attrs;
mod derive;

use proc_macro::TokenStream;

/// Derive `Parameters` and `ParameterType` for a struct.
///
/// # Struct Attributes
///
/// - `#[params(name = "Address")]` - Name of the parameter type (defaults to the struct name)
///
/// # Field Attributes
///
/// Each `#[param(...)]` attribute declares where the field lands in one
/// resolution context. Fields without `#[param]` never appear in payloads.
///
/// - `path = "a.b.c"` - Dotted key path (required on every declaration)
/// - `parent = Type` - The declaration applies when the object is nested
///   directly inside `Type`; without `parent` it applies at the request root
/// - `required` - Fail the build when the value is absent in this context
/// - `nested` - The field holds a parameter object (`T`, `Option<T>`),
///   or a sequence of them (`Vec<T>`, `Option<Vec<T>>`)
///
/// # Compile Errors
///
/// - two declarations of one field for the same context
/// - two `required` declarations on the same path and context
/// - a terminal value declared on a key another path descends through
///
/// # Example
///
/// ```ignore
/// #[derive(Parameters)]
/// pub struct CreateShipment {
///     #[param(nested, path = "shipment.to_address", required)]
///     #[param(parent = CreateOrder, path = "to_address")]
///     pub to_address: Option<CreateAddress>,
///
///     #[param(nested, path = "shipment.parcel", required)]
///     #[param(parent = CreateOrder, path = "parcel", required)]
///     pub parcel: Option<CreateParcel>,
/// }
/// ```
#[proc_macro_derive(Parameters, attributes(params, param))]
pub fn derive_parameters(input: TokenStream) -> TokenStream {
    derive::expand_parameters(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
