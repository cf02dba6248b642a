//! Necessity and path metadata for parameter objects.
//!
//! Every mappable field of a parameter object carries one or more
//! [`PathDecl`]s. A declaration states the [`PathContext`] it applies to,
//! whether a value is mandatory there, and the key sequence the value lands
//! at in the output payload.
//!
//! Metadata is `'static` and read-only: it is registered once per type
//! (usually by `#[derive(Parameters)]`) and shared by every build.
//!
//! # Example
//!
//! ```
//! use waybill_core::{FieldDecl, FieldKind, Necessity, ParamSchema, ParamType, PathDecl};
//!
//! const SHIPMENT: ParamType = ParamType::new("CreateShipment");
//!
//! static SCHEMA: ParamSchema = ParamSchema {
//!     param_type: ParamType::new("CreateAddress"),
//!     fields: &[FieldDecl {
//!         name: "street1",
//!         kind: FieldKind::Scalar,
//!         paths: &[
//!             PathDecl::root(&["address", "street1"], Necessity::Required),
//!             PathDecl::nested_in(SHIPMENT, &["street1"], Necessity::Required),
//!         ],
//!     }],
//! };
//!
//! assert!(SCHEMA.validate().is_ok());
//! assert_eq!(SCHEMA.consumers(), vec![SHIPMENT]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use derive_more::Display;

use crate::{Error, Result};

/// Whether a value must be present for a path declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Necessity {
    /// An absent value fails the build.
    #[display("required")]
    Required,
    /// An absent value is omitted from the payload.
    #[display("optional")]
    Optional,
}

impl Necessity {
    /// Returns `true` for [`Necessity::Required`].
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Identity of a parameter object type.
///
/// Two types are the same consumer only if their qualified paths match;
/// the short name is what diagnostics show.
#[derive(Clone, Copy, Display)]
#[display("{name}")]
pub struct ParamType {
    name: &'static str,
    path: &'static str,
}

impl ParamType {
    /// Create a parameter type identity whose name is also its path.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, path: name }
    }

    /// Create a parameter type identity with a display name and a unique
    /// path, e.g. `module_path!()` joined with the type name.
    #[must_use]
    pub const fn qualified(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// The type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// The qualified path identifying the type.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.path
    }

    /// Identity comparison usable in constant evaluation.
    #[must_use]
    pub const fn is(self, other: Self) -> bool {
        str_eq(self.path, other.path)
    }
}

impl fmt::Debug for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParamType").field(&self.path).finish()
    }
}

impl PartialEq for ParamType {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ParamType {}

impl Hash for ParamType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for ParamType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParamType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(other.path)
    }
}

/// Resolution context threaded through a build.
///
/// A build starts in [`Context::Root`]. Each descent into a nested
/// parameter object switches to [`Context::NestedIn`] the type of the
/// immediately enclosing object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Context {
    /// The object is the request root.
    #[display("root")]
    Root,
    /// The object is embedded inside a parameter object of the given type.
    #[display("nested in {_0}")]
    NestedIn(ParamType),
}

/// Context a [`PathDecl`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PathContext {
    /// Applies when the owning object is the request root.
    #[display("root")]
    Root,
    /// Applies when the owning object is nested inside the given type.
    #[display("parent {_0}")]
    Parent(ParamType),
}

impl PathContext {
    /// Same context, usable in constant evaluation.
    #[must_use]
    pub const fn is(self, other: Self) -> bool {
        match (self, other) {
            (Self::Root, Self::Root) => true,
            (Self::Parent(a), Self::Parent(b)) => a.is(b),
            _ => false,
        }
    }

    /// Returns `true` if this declaration applies in `context`.
    #[must_use]
    pub fn applies_to(self, context: Context) -> bool {
        match (self, context) {
            (Self::Root, Context::Root) => true,
            (Self::Parent(parent), Context::NestedIn(enclosing)) => parent == enclosing,
            _ => false,
        }
    }
}

/// Where a field lands for one context, and whether it must be present there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathDecl {
    /// Context this declaration applies to.
    pub context: PathContext,
    /// Necessity of the value in this context.
    pub necessity: Necessity,
    /// Key sequence, outermost first.
    pub keys: &'static [&'static str],
}

impl PathDecl {
    /// Declaration used when the owning object is the request root.
    #[must_use]
    pub const fn root(keys: &'static [&'static str], necessity: Necessity) -> Self {
        Self {
            context: PathContext::Root,
            necessity,
            keys,
        }
    }

    /// Declaration used when the owning object is nested inside `parent`.
    #[must_use]
    pub const fn nested_in(
        parent: ParamType,
        keys: &'static [&'static str],
        necessity: Necessity,
    ) -> Self {
        Self {
            context: PathContext::Parent(parent),
            necessity,
            keys,
        }
    }

    /// Keys joined with `.`, for diagnostics.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.keys.join(".")
    }
}

/// How a field value is resolved by the payload builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FieldKind {
    /// A terminal value (string, number, boolean, date, sequence of those).
    #[display("scalar")]
    Scalar,
    /// A nested parameter object, built recursively.
    #[display("nested")]
    Nested,
    /// A sequence of nested parameter objects, each built recursively.
    #[display("nested list")]
    NestedList,
}

impl FieldKind {
    /// Same kind, usable in constant evaluation.
    #[must_use]
    pub const fn is(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Scalar, Self::Scalar)
                | (Self::Nested, Self::Nested)
                | (Self::NestedList, Self::NestedList)
        )
    }
}

/// Metadata of a single mappable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name as declared on the type.
    pub name: &'static str,
    /// How the field value is resolved.
    pub kind: FieldKind,
    /// One declaration per context the field is visible in.
    pub paths: &'static [PathDecl],
}

impl FieldDecl {
    /// The declaration applicable in `context`, if any.
    ///
    /// A field without a declaration for the active context is invisible
    /// in that context, whatever its necessity elsewhere.
    #[must_use]
    pub fn path_for(&self, context: Context) -> Option<&'static PathDecl> {
        self.paths
            .iter()
            .find(|decl| decl.context.applies_to(context))
    }
}

/// Complete metadata of a parameter object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSchema {
    /// Identity of the type.
    pub param_type: ParamType,
    /// Mappable fields, in declaration order.
    pub fields: &'static [FieldDecl],
}

impl ParamSchema {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Every parent type this object declares paths for, in first-seen order.
    #[must_use]
    pub fn consumers(&self) -> Vec<ParamType> {
        let mut consumers = Vec::new();
        for decl in self.fields.iter().flat_map(|field| field.paths) {
            if let PathContext::Parent(parent) = decl.context
                && !consumers.contains(&parent)
            {
                consumers.push(parent);
            }
        }
        consumers
    }

    /// Check the metadata for declarations that cannot produce a well-formed payload.
    ///
    /// Rejected:
    /// - empty key sequences and empty keys
    /// - a field declaring two paths for the same context
    /// - two required fields declaring the same path in the same context
    /// - fields whose shapes cannot share a path (a terminal value at a key
    ///   another declaration descends through, or a mapping and a terminal
    ///   value on the same key)
    pub fn validate(&self) -> Result<()> {
        let Some(found) = self.find_defect() else {
            return Ok(());
        };
        let Finding {
            defect,
            field,
            decl,
            other,
        } = found;

        Err(match defect {
            Defect::EmptyPath => self.invalid(field, decl, "declares an empty path for"),
            Defect::EmptyKey => self.invalid(field, decl, "declares an empty key for"),
            Defect::DuplicateContext => self.invalid(field, decl, "declares more than one path for"),
            Defect::BothRequired => self.conflict(other, field, decl, "both required"),
            Defect::ShapesDiffer => self.conflict(other, field, decl, "shapes differ"),
            Defect::TerminalOnIntermediate => self.conflict(
                other,
                field,
                decl,
                "a terminal value sits on an intermediate key",
            ),
        })
    }

    /// Fail constant evaluation when [`ParamSchema::validate`] would fail.
    ///
    /// `#[derive(Parameters)]` evaluates this for every derived type, so a
    /// malformed schema never compiles.
    ///
    /// # Panics
    ///
    /// Panics when the schema has a defect.
    pub const fn assert_well_formed(&self) {
        let Some(found) = self.find_defect() else {
            return;
        };
        match found.defect {
            Defect::EmptyPath => panic!("parameter schema declares an empty path"),
            Defect::EmptyKey => panic!("parameter schema declares an empty key"),
            Defect::DuplicateContext => {
                panic!("parameter schema declares more than one path for one context")
            }
            Defect::BothRequired => {
                panic!("parameter schema declares two required fields on one path")
            }
            Defect::ShapesDiffer => {
                panic!("parameter schema declares a mapping and a terminal value on one key")
            }
            Defect::TerminalOnIntermediate => {
                panic!("parameter schema declares a terminal value on an intermediate key")
            }
        }
    }

    /// First defect in declaration order.
    const fn find_defect(&self) -> Option<Finding> {
        let mut fields = self.fields;
        let mut index = 0;

        while let [field, rest @ ..] = fields {
            let mut decls = field.paths;
            let mut position = 0;

            while let [decl, more @ ..] = decls {
                if decl.keys.is_empty() {
                    return Some(Finding::own(Defect::EmptyPath, field, decl));
                }
                if has_empty_key(decl.keys) {
                    return Some(Finding::own(Defect::EmptyKey, field, decl));
                }
                if declares_context(field.paths, position, decl.context) {
                    return Some(Finding::own(Defect::DuplicateContext, field, decl));
                }
                if let Some(found) = collision_with_earlier(self.fields, index, field, decl) {
                    return Some(found);
                }
                decls = more;
                position += 1;
            }

            fields = rest;
            index += 1;
        }

        None
    }

    fn invalid(&self, field: &FieldDecl, decl: &PathDecl, what: &str) -> Error {
        Error::invalid_schema(format!(
            "field `{}` of {} {what} {}",
            field.name, self.param_type, decl.context
        ))
    }

    fn conflict(&self, first: &FieldDecl, second: &FieldDecl, decl: &PathDecl, why: &str) -> Error {
        Error::invalid_schema(format!(
            "fields `{}` and `{}` of {} collide on `{}` for {} ({why})",
            first.name,
            second.name,
            self.param_type,
            decl.dotted(),
            decl.context
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Defect {
    EmptyPath,
    EmptyKey,
    DuplicateContext,
    BothRequired,
    ShapesDiffer,
    TerminalOnIntermediate,
}

#[derive(Debug, Clone, Copy)]
struct Finding {
    defect: Defect,
    field: &'static FieldDecl,
    decl: &'static PathDecl,
    /// The earlier field a collision is with; `field` itself otherwise.
    other: &'static FieldDecl,
}

impl Finding {
    const fn own(defect: Defect, field: &'static FieldDecl, decl: &'static PathDecl) -> Self {
        Self {
            defect,
            field,
            decl,
            other: field,
        }
    }
}

/// Compare `decl` of `field` with every declaration of the first `count` fields.
const fn collision_with_earlier(
    fields: &'static [FieldDecl],
    count: usize,
    field: &'static FieldDecl,
    decl: &'static PathDecl,
) -> Option<Finding> {
    let mut earlier = fields;
    let mut remaining = count;

    while remaining > 0 {
        let [other_field, tail @ ..] = earlier else {
            break;
        };
        let mut others = other_field.paths;
        while let [other, next @ ..] = others {
            if other.context.is(decl.context) {
                let defect = if keys_eq(other.keys, decl.keys) {
                    if other.necessity.is_required() && decl.necessity.is_required() {
                        Some(Defect::BothRequired)
                    } else if !other_field.kind.is(field.kind) {
                        Some(Defect::ShapesDiffer)
                    } else {
                        None
                    }
                } else if is_blocking_prefix(other_field.kind, other.keys, decl.keys)
                    || is_blocking_prefix(field.kind, decl.keys, other.keys)
                {
                    Some(Defect::TerminalOnIntermediate)
                } else {
                    None
                };
                if let Some(defect) = defect {
                    return Some(Finding {
                        defect,
                        field,
                        decl,
                        other: other_field,
                    });
                }
            }
            others = next;
        }
        earlier = tail;
        remaining -= 1;
    }

    None
}

/// One of the first `count` declarations applies to `context`.
const fn declares_context(paths: &[PathDecl], count: usize, context: PathContext) -> bool {
    let mut paths = paths;
    let mut remaining = count;
    while remaining > 0 {
        let [decl, rest @ ..] = paths else {
            return false;
        };
        if decl.context.is(context) {
            return true;
        }
        paths = rest;
        remaining -= 1;
    }
    false
}

const fn has_empty_key(keys: &[&str]) -> bool {
    let mut keys = keys;
    while let [key, rest @ ..] = keys {
        if key.is_empty() {
            return true;
        }
        keys = rest;
    }
    false
}

/// `shorter` is a strict prefix of `longer` and holds something other than a mapping.
const fn is_blocking_prefix(kind: FieldKind, shorter: &[&str], longer: &[&str]) -> bool {
    !matches!(kind, FieldKind::Nested)
        && shorter.len() < longer.len()
        && starts_with(longer, shorter)
}

const fn starts_with(keys: &[&str], prefix: &[&str]) -> bool {
    let mut keys = keys;
    let mut prefix = prefix;
    loop {
        match (keys, prefix) {
            (_, []) => return true,
            ([key, rest @ ..], [expected, more @ ..]) => {
                if !str_eq(key, expected) {
                    return false;
                }
                keys = rest;
                prefix = more;
            }
            ([], _) => return false,
        }
    }
}

const fn keys_eq(a: &[&str], b: &[&str]) -> bool {
    a.len() == b.len() && starts_with(a, b)
}

const fn str_eq(a: &str, b: &str) -> bool {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();
    loop {
        match (a, b) {
            ([], []) => return true,
            ([x, rest_a @ ..], [y, rest_b @ ..]) if *x == *y => {
                a = rest_a;
                b = rest_b;
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    const ADDRESS: ParamType = ParamType::new("CreateAddress");
    const SHIPMENT: ParamType = ParamType::new("CreateShipment");
    const ORDER: ParamType = ParamType::new("CreateOrder");

    fn validation_message(schema: &ParamSchema) -> String {
        let result = schema.validate();
        let_assert!(Err(Error::InvalidSchema(message)) = result);
        message
    }

    #[test]
    fn necessity_display() {
        assert_eq!(Necessity::Required.to_string(), "required");
        assert_eq!(Necessity::Optional.to_string(), "optional");
        check!(Necessity::Required.is_required());
        check!(!Necessity::Optional.is_required());
    }

    #[test]
    fn context_display() {
        assert_eq!(Context::Root.to_string(), "root");
        assert_eq!(
            Context::NestedIn(SHIPMENT).to_string(),
            "nested in CreateShipment"
        );
        assert_eq!(PathContext::Parent(ORDER).to_string(), "parent CreateOrder");
    }

    #[test]
    fn path_context_matches_only_its_own_context() {
        check!(PathContext::Root.applies_to(Context::Root));
        check!(!PathContext::Root.applies_to(Context::NestedIn(SHIPMENT)));
        check!(PathContext::Parent(SHIPMENT).applies_to(Context::NestedIn(SHIPMENT)));
        check!(!PathContext::Parent(SHIPMENT).applies_to(Context::NestedIn(ORDER)));
        check!(!PathContext::Parent(SHIPMENT).applies_to(Context::Root));
    }

    #[test]
    fn path_for_picks_declaration_per_context() {
        static FIELD: FieldDecl = FieldDecl {
            name: "street1",
            kind: FieldKind::Scalar,
            paths: &[
                PathDecl::root(&["address", "street1"], Necessity::Required),
                PathDecl::nested_in(SHIPMENT, &["street1"], Necessity::Optional),
            ],
        };

        let root = FIELD.path_for(Context::Root).expect("root path");
        assert_eq!(root.keys, &["address", "street1"]);
        assert_eq!(root.necessity, Necessity::Required);
        assert_eq!(root.dotted(), "address.street1");

        let nested = FIELD
            .path_for(Context::NestedIn(SHIPMENT))
            .expect("nested path");
        assert_eq!(nested.keys, &["street1"]);
        assert_eq!(nested.necessity, Necessity::Optional);

        check!(FIELD.path_for(Context::NestedIn(ORDER)).is_none());
    }

    #[test]
    fn consumers_are_deduplicated_in_declaration_order() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "street1",
                    kind: FieldKind::Scalar,
                    paths: &[
                        PathDecl::nested_in(SHIPMENT, &["street1"], Necessity::Required),
                        PathDecl::nested_in(ORDER, &["street1"], Necessity::Required),
                    ],
                },
                FieldDecl {
                    name: "city",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::nested_in(SHIPMENT, &["city"], Necessity::Optional)],
                },
            ],
        };

        assert_eq!(SCHEMA.consumers(), vec![SHIPMENT, ORDER]);
        assert_eq!(SCHEMA.field("city").map(|f| f.name), Some("city"));
        check!(SCHEMA.field("zip").is_none());
    }

    #[test]
    fn validate_accepts_well_formed_schema() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "street1",
                    kind: FieldKind::Scalar,
                    paths: &[
                        PathDecl::root(&["address", "street1"], Necessity::Required),
                        PathDecl::nested_in(SHIPMENT, &["street1"], Necessity::Required),
                    ],
                },
                FieldDecl {
                    name: "verify",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["verify"], Necessity::Optional)],
                },
            ],
        };
        check!(SCHEMA.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_paths() {
        static EMPTY_PATH: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[PathDecl::root(&[], Necessity::Optional)],
            }],
        };
        static EMPTY_KEY: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[PathDecl::root(&["address", ""], Necessity::Optional)],
            }],
        };

        check!(validation_message(&EMPTY_PATH).contains("empty path"));
        check!(validation_message(&EMPTY_KEY).contains("empty key"));
    }

    #[test]
    fn validate_rejects_two_paths_for_one_context() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::root(&["address", "street1"], Necessity::Optional),
                    PathDecl::root(&["street1"], Necessity::Optional),
                ],
            }],
        };
        check!(validation_message(&SCHEMA).contains("more than one path"));
    }

    #[test]
    fn validate_rejects_colliding_required_fields() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "email",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address", "email"], Necessity::Required)],
                },
                FieldDecl {
                    name: "contact",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address", "email"], Necessity::Required)],
                },
            ],
        };
        let message = validation_message(&SCHEMA);
        check!(message.contains("`email` and `contact`"));
        check!(message.contains("both required"));
    }

    #[test]
    fn validate_allows_optional_collisions() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "email",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address", "email"], Necessity::Required)],
                },
                FieldDecl {
                    name: "contact",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address", "email"], Necessity::Optional)],
                },
            ],
        };
        check!(SCHEMA.validate().is_ok());
    }

    #[test]
    fn validate_rejects_terminal_on_intermediate_key() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "address",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address"], Necessity::Optional)],
                },
                FieldDecl {
                    name: "street1",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["address", "street1"], Necessity::Optional)],
                },
            ],
        };
        check!(validation_message(&SCHEMA).contains("intermediate key"));
    }

    #[test]
    fn validate_rejects_mapping_and_terminal_on_same_key() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: SHIPMENT,
            fields: &[
                FieldDecl {
                    name: "to_address",
                    kind: FieldKind::Nested,
                    paths: &[PathDecl::root(&["shipment", "to_address"], Necessity::Optional)],
                },
                FieldDecl {
                    name: "to_address_id",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["shipment", "to_address"], Necessity::Optional)],
                },
            ],
        };
        check!(validation_message(&SCHEMA).contains("shapes differ"));
    }

    #[test]
    fn validate_allows_nested_object_under_shared_prefix() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: SHIPMENT,
            fields: &[
                FieldDecl {
                    name: "to_address",
                    kind: FieldKind::Nested,
                    paths: &[PathDecl::root(&["shipment"], Necessity::Optional)],
                },
                FieldDecl {
                    name: "reference",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["shipment", "reference"], Necessity::Optional)],
                },
            ],
        };
        check!(SCHEMA.validate().is_ok());
    }

    #[test]
    fn validate_ignores_other_contexts() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "email",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["email"], Necessity::Required)],
                },
                FieldDecl {
                    name: "contact",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::nested_in(SHIPMENT, &["email"], Necessity::Required)],
                },
            ],
        };
        check!(SCHEMA.validate().is_ok());
    }

    #[test]
    fn same_name_in_different_modules_is_a_different_type() {
        let billing = ParamType::qualified("Holder", "billing::Holder");
        let shipping = ParamType::qualified("Holder", "shipping::Holder");

        check!(billing != shipping);
        check!(!billing.is(shipping));
        check!(billing.to_string() == shipping.to_string());
        check!(PathContext::Parent(billing).applies_to(Context::NestedIn(billing)));
        check!(!PathContext::Parent(billing).applies_to(Context::NestedIn(shipping)));
    }

    #[test]
    fn validate_compares_parents_by_identity() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::nested_in(
                        ParamType::qualified("Holder", "billing::Holder"),
                        &["street1"],
                        Necessity::Optional,
                    ),
                    PathDecl::nested_in(
                        ParamType::qualified("Holder", "billing::Holder"),
                        &["line1"],
                        Necessity::Optional,
                    ),
                ],
            }],
        };
        static DISTINCT: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::nested_in(
                        ParamType::qualified("Holder", "billing::Holder"),
                        &["street1"],
                        Necessity::Optional,
                    ),
                    PathDecl::nested_in(
                        ParamType::qualified("Holder", "shipping::Holder"),
                        &["line1"],
                        Necessity::Optional,
                    ),
                ],
            }],
        };

        check!(validation_message(&SCHEMA).contains("more than one path"));
        check!(DISTINCT.validate().is_ok());
    }

    #[test]
    fn well_formed_schema_passes_constant_check() {
        const CHECKED: () = SCHEMA.assert_well_formed();
        const SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[FieldDecl {
                name: "street1",
                kind: FieldKind::Scalar,
                paths: &[
                    PathDecl::root(&["address", "street1"], Necessity::Required),
                    PathDecl::nested_in(SHIPMENT, &["street1"], Necessity::Required),
                ],
            }],
        };
        let () = CHECKED;
    }

    #[test]
    #[should_panic(expected = "two required fields on one path")]
    fn constant_check_rejects_colliding_required_fields() {
        static SCHEMA: ParamSchema = ParamSchema {
            param_type: ADDRESS,
            fields: &[
                FieldDecl {
                    name: "street1",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["street"], Necessity::Required)],
                },
                FieldDecl {
                    name: "street2",
                    kind: FieldKind::Scalar,
                    paths: &[PathDecl::root(&["street"], Necessity::Required)],
                },
            ],
        };
        SCHEMA.assert_well_formed();
    }
}
