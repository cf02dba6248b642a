//! Payload building through `#[derive(Parameters)]`.

use assert2::{check, let_assert};
use serde_json::{Value, json};
use waybill::params::{CreateAddress, CreateOrder, CreateParcel, CreateShipment};
use waybill::{
    Context, Error, ParameterType, Parameters, build_in_context, build_payload, check_required,
    missing_required_fields, unwrap_path, wrap,
};

fn as_value(payload: waybill::Payload) -> Value {
    Value::Object(payload)
}

#[test]
fn townsend_street_as_request_root() {
    let address = CreateAddress::new("388 Townsend St").verify(true);

    let payload = build_payload(&address).expect("build");

    check!(as_value(payload) == json!({ "address": { "street1": "388 Townsend St" }, "verify": true }));
}

#[test]
fn townsend_street_nested_in_a_shipment() {
    let shipment = CreateShipment::new(
        CreateAddress::new("388 Townsend St").verify(true),
        CreateAddress::new("179 N Harbor Dr"),
        CreateParcel::weighing(65.9),
    );

    let payload = as_value(build_payload(&shipment).expect("build"));

    check!(payload["shipment"]["to_address"] == json!({ "street1": "388 Townsend St" }));
    check!(unwrap_path(&payload, &["verify"]).is_none());
}

#[test]
fn builds_are_idempotent() {
    let order = CreateOrder::new(
        CreateAddress::new("388 Townsend St").city("San Francisco"),
        CreateAddress::new("179 N Harbor Dr"),
    )
    .shipment(CreateShipment::of_parcel(CreateParcel::weighing(10.0)));

    let first = build_payload(&order).expect("build");
    let second = build_payload(&order).expect("build");
    check!(first == second);
    check!(serde_json::to_string(&first).ok() == serde_json::to_string(&second).ok());
}

#[test]
fn missing_required_field_sends_nothing_partial() {
    let shipment = CreateShipment {
        parcel: None,
        ..CreateShipment::new(
            CreateAddress::new("388 Townsend St"),
            CreateAddress::new("179 N Harbor Dr"),
            CreateParcel::weighing(1.0),
        )
    };

    let_assert!(Err(err) = build_payload(&shipment));
    check!(err.is_build_error());
    check!(err.missing_field() == Some("parcel"));
    check!(err.to_string().contains("CreateShipment"));

    let_assert!(Err(_) = check_required(&shipment));
}

#[test]
fn diagnostics_list_every_missing_field() {
    let shipment = CreateShipment {
        to_address: Some(CreateAddress::default()),
        ..CreateShipment::default()
    };

    let missing = missing_required_fields(&shipment).expect("collect");
    let fields: Vec<_> = missing.iter().map(|m| m.field).collect();
    check!(fields == ["from_address", "parcel", "street1"]);

    let_assert!(Some(nested) = missing.last());
    check!(nested.owner == CreateAddress::PARAM_TYPE);
    check!(nested.context == Context::NestedIn(CreateShipment::PARAM_TYPE));
    check!(nested.to_string() == "CreateAddress.street1 (nested in CreateShipment) at `street1`");
}

#[test]
fn wrap_round_trip() {
    let payload = wrap("rate_1", &["rate", "id"]).expect("wrap");
    let value = as_value(payload);
    check!(unwrap_path(&value, &["rate", "id"]) == Some(&json!("rate_1")));

    let_assert!(Err(Error::MalformedWrap) = wrap("rate_1", &[]));
}

// A chain of three types declared outside the crate: Manifest > Crate > Label.

#[derive(Debug, Default, Parameters)]
#[params(name = "Manifest")]
struct TestManifest {
    #[param(nested, path = "manifest.crates", required)]
    crates: Vec<TestCrate>,

    #[param(path = "manifest.carrier")]
    carrier: Option<String>,
}

#[derive(Debug, Default, Parameters)]
#[params(name = "Crate")]
struct TestCrate {
    #[param(nested, path = "crate.label")]
    #[param(parent = TestManifest, nested, path = "label", required)]
    label: Option<TestLabel>,

    #[param(path = "crate.weight")]
    #[param(parent = TestManifest, path = "weight")]
    weight: Option<f64>,

    // Not mappable
    #[allow(dead_code)]
    note: Option<String>,
}

#[derive(Debug, Default, Parameters)]
#[params(name = "Label")]
struct TestLabel {
    #[param(path = "label.format", required)]
    #[param(parent = TestCrate, path = "format", required)]
    format: Option<String>,

    #[param(path = "label.size")]
    #[param(parent = TestCrate, path = "dimensions.size")]
    size: Option<String>,
}

fn label(format: &str) -> TestLabel {
    TestLabel {
        format: Some(format.to_string()),
        size: Some("4x6".to_string()),
    }
}

#[test]
fn context_depends_on_the_immediate_parent_only() {
    let manifest = TestManifest {
        crates: vec![
            TestCrate {
                label: Some(label("PDF")),
                weight: Some(2.5),
                note: Some("fragile".to_string()),
            },
            TestCrate {
                label: Some(label("ZPL")),
                ..TestCrate::default()
            },
        ],
        carrier: Some("USPS".to_string()),
    };

    let payload = as_value(build_payload(&manifest).expect("build"));

    check!(
        payload
            == json!({
                "manifest": {
                    "crates": [
                        { "label": { "format": "PDF", "dimensions": { "size": "4x6" } }, "weight": 2.5 },
                        { "label": { "format": "ZPL", "dimensions": { "size": "4x6" } } },
                    ],
                    "carrier": "USPS",
                }
            })
    );
}

#[test]
fn necessity_is_per_context() {
    let lone = TestCrate::default();
    check!(build_payload(&lone).expect("build").is_empty());

    let manifest = TestManifest {
        crates: vec![TestCrate::default()],
        carrier: None,
    };
    let_assert!(Err(Error::MissingRequiredField { field, owner, context }) = build_payload(&manifest));
    check!(field == "label");
    check!(owner.name() == "Crate");
    check!(context == Context::NestedIn(TestManifest::PARAM_TYPE));
}

#[test]
fn derived_schemas() {
    check!(TestManifest::PARAM_TYPE.name() == "Manifest");
    check!(TestLabel::SCHEMA.consumers() == vec![TestCrate::PARAM_TYPE]);
    check!(TestCrate::SCHEMA.field("note").is_none());
    check!(TestCrate::SCHEMA.validate().is_ok());

    let_assert!(Some(weight) = TestCrate::SCHEMA.field("weight"));
    let_assert!(Some(decl) = weight.path_for(Context::NestedIn(TestManifest::PARAM_TYPE)));
    check!(decl.keys == ["weight"]);
    check!(weight.path_for(Context::NestedIn(TestLabel::PARAM_TYPE)).is_none());

    let label = label("PNG");
    check!(label.schema() == TestLabel::SCHEMA);
}

#[test]
fn nested_build_in_unknown_context_is_empty() {
    let payload =
        build_in_context(&label("PNG"), Context::NestedIn(CreateOrder::PARAM_TYPE)).expect("build");
    check!(payload.is_empty());
}

mod billing {
    use waybill::Parameters;

    #[derive(Debug, Default, Parameters)]
    pub struct Holder {
        #[param(nested, path = "billing.child")]
        pub child: Option<super::Child>,
    }
}

mod shipping {
    use waybill::Parameters;

    #[derive(Debug, Default, Parameters)]
    pub struct Holder {
        #[param(nested, path = "shipping.child")]
        pub child: Option<super::Child>,
    }
}

#[derive(Debug, Default, Parameters)]
struct Child {
    #[param(parent = billing::Holder, path = "secret")]
    secret: Option<String>,
}

#[test]
fn same_type_name_in_another_module_is_another_context() {
    check!(billing::Holder::PARAM_TYPE.name() == shipping::Holder::PARAM_TYPE.name());
    check!(billing::Holder::PARAM_TYPE != shipping::Holder::PARAM_TYPE);
    check!(Child::SCHEMA.consumers() == vec![billing::Holder::PARAM_TYPE]);

    let child = || {
        Some(Child {
            secret: Some("leak".to_string()),
        })
    };

    let billed = as_value(build_payload(&billing::Holder { child: child() }).expect("build"));
    check!(billed == json!({ "billing": { "child": { "secret": "leak" } } }));

    let shipped = as_value(build_payload(&shipping::Holder { child: child() }).expect("build"));
    check!(unwrap_path(&shipped, &["shipping", "child", "secret"]).is_none());
    check!(!shipped.to_string().contains("leak"));
}

#[test]
fn concurrent_builds_share_metadata() {
    let addresses: Vec<_> = (0..8)
        .map(|i| CreateAddress::new(format!("{i} Townsend St")).zip("94107"))
        .collect();

    let payloads: Vec<Value> = std::thread::scope(|scope| {
        let handles: Vec<_> = addresses
            .iter()
            .map(|address| scope.spawn(move || build_payload(address).map(Value::Object)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("join").expect("build"))
            .collect()
    });

    for (i, payload) in payloads.iter().enumerate() {
        check!(payload["address"]["street1"] == json!(format!("{i} Townsend St")));
        check!(payload["address"]["zip"] == "94107");
    }
}
