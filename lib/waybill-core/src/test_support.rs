//! Hand-written parameter objects shared by the engine's unit tests.

use crate::meta::{FieldDecl, FieldKind, Necessity, ParamSchema, ParamType, PathDecl};
use crate::params::{FieldValue, ParameterType, Parameters};
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub(crate) struct Address {
    pub(crate) street1: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) verify: Option<bool>,
}

impl Address {
    pub(crate) fn at(street1: &str) -> Self {
        Self {
            street1: Some(street1.to_string()),
            ..Self::default()
        }
    }
}

impl ParameterType for Address {
    const PARAM_TYPE: ParamType = ParamType::new("Address");
    const SCHEMA: &'static ParamSchema = &ParamSchema {
        param_type: Self::PARAM_TYPE,
        fields: &[
            FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::root(&["address", "street1"], Necessity::Required),
                    PathDecl::nested_in(Shipment::PARAM_TYPE, &["street1"], Necessity::Required),
                ],
            },
            FieldDecl {
                name: "email",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::root(&["address", "email"], Necessity::Optional),
                    PathDecl::nested_in(Shipment::PARAM_TYPE, &["email"], Necessity::Optional),
                ],
            },
            FieldDecl {
                name: "verify",
                kind: FieldKind::Scalar,
                paths: &[PathDecl::root(&["verify"], Necessity::Optional)],
            },
        ],
    };
}

impl Parameters for Address {
    fn schema(&self) -> &'static ParamSchema {
        Self::SCHEMA
    }

    fn field_value(&self, index: usize) -> Result<FieldValue<'_>> {
        match index {
            0 => FieldValue::optional_scalar(self.street1.as_ref()),
            1 => FieldValue::optional_scalar(self.email.as_ref()),
            2 => FieldValue::optional_scalar(self.verify.as_ref()),
            _ => Err(unknown_field(Self::PARAM_TYPE, index)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Shipment {
    pub(crate) to_address: Option<Address>,
    pub(crate) reference: Option<String>,
}

impl Shipment {
    pub(crate) fn to(address: Address) -> Self {
        Self {
            to_address: Some(address),
            ..Self::default()
        }
    }
}

impl ParameterType for Shipment {
    const PARAM_TYPE: ParamType = ParamType::new("Shipment");
    const SCHEMA: &'static ParamSchema = &ParamSchema {
        param_type: Self::PARAM_TYPE,
        fields: &[
            FieldDecl {
                name: "to_address",
                kind: FieldKind::Nested,
                paths: &[
                    PathDecl::root(&["shipment", "to_address"], Necessity::Required),
                    PathDecl::nested_in(Order::PARAM_TYPE, &["to_address"], Necessity::Optional),
                ],
            },
            FieldDecl {
                name: "reference",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::root(&["shipment", "reference"], Necessity::Optional),
                    PathDecl::nested_in(Order::PARAM_TYPE, &["reference"], Necessity::Optional),
                ],
            },
        ],
    };
}

impl Parameters for Shipment {
    fn schema(&self) -> &'static ParamSchema {
        Self::SCHEMA
    }

    fn field_value(&self, index: usize) -> Result<FieldValue<'_>> {
        match index {
            0 => Ok(FieldValue::optional_nested(self.to_address.as_ref())),
            1 => FieldValue::optional_scalar(self.reference.as_ref()),
            _ => Err(unknown_field(Self::PARAM_TYPE, index)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Order {
    pub(crate) shipments: Vec<Shipment>,
    pub(crate) reference: Option<String>,
}

impl ParameterType for Order {
    const PARAM_TYPE: ParamType = ParamType::new("Order");
    const SCHEMA: &'static ParamSchema = &ParamSchema {
        param_type: Self::PARAM_TYPE,
        fields: &[
            FieldDecl {
                name: "shipments",
                kind: FieldKind::NestedList,
                paths: &[PathDecl::root(&["order", "shipments"], Necessity::Required)],
            },
            FieldDecl {
                name: "reference",
                kind: FieldKind::Scalar,
                paths: &[PathDecl::root(&["order", "reference"], Necessity::Optional)],
            },
        ],
    };
}

impl Parameters for Order {
    fn schema(&self) -> &'static ParamSchema {
        Self::SCHEMA
    }

    fn field_value(&self, index: usize) -> Result<FieldValue<'_>> {
        match index {
            0 => Ok(FieldValue::nested_list(&self.shipments)),
            1 => FieldValue::optional_scalar(self.reference.as_ref()),
            _ => Err(unknown_field(Self::PARAM_TYPE, index)),
        }
    }
}

fn unknown_field(owner: ParamType, index: usize) -> Error {
    Error::invalid_schema(format!("{owner} has no field at index {index}"))
}
