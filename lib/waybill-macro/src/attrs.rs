//! Attribute parsing for `#[derive(Parameters)]`.

use proc_macro2::Span;
use quote::ToTokens;
use syn::{Attribute, LitStr, Path, Type};

/// Struct-level options parsed from `#[params(...)]`.
#[derive(Debug, Clone, Default)]
pub(crate) struct StructOptions {
    /// Overrides the parameter type name (defaults to the struct name).
    pub(crate) name: Option<String>,
}

/// Parse struct-level options.
pub(crate) fn parse_struct_options(attrs: &[Attribute]) -> syn::Result<StructOptions> {
    let mut options = StructOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("params") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(syn::Error::new_spanned(&value, "name must not be empty"));
                }
                options.name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unknown `params` key, expected `name`"))
            }
        })?;
    }

    Ok(options)
}

/// One `#[param(...)]` declaration: where the field lands in one context.
#[derive(Debug, Clone)]
pub(crate) struct PathAttr {
    /// Consumer type for context paths, `None` for the root path.
    pub(crate) parent: Option<Path>,
    /// Key sequence, outermost first.
    pub(crate) keys: Vec<String>,
    /// `required` flag.
    pub(crate) required: bool,
    /// Span of the `path` literal, for diagnostics.
    pub(crate) span: Span,
}

impl PathAttr {
    /// Comparable identity of the context, e.g. `root` or `CreateShipment`.
    pub(crate) fn context_key(&self) -> String {
        self.parent.as_ref().map_or_else(
            || "root".to_string(),
            |parent| parent.to_token_stream().to_string().replace(' ', ""),
        )
    }

    /// Human readable context, for diagnostics.
    pub(crate) fn context_label(&self) -> String {
        match self.parent {
            Some(_) => format!("parent `{}`", self.context_key()),
            None => "root".to_string(),
        }
    }

    /// Keys joined with `.`.
    pub(crate) fn dotted(&self) -> String {
        self.keys.join(".")
    }
}

/// Field options parsed from every `#[param(...)]` attribute of a field.
#[derive(Debug, Clone, Default)]
pub(crate) struct FieldOptions {
    /// The field holds nested parameter objects.
    pub(crate) nested: bool,
    /// One declaration per context.
    pub(crate) paths: Vec<PathAttr>,
}

/// Parse the `#[param(...)]` attributes of a field.
///
/// Returns `None` when the field carries no `#[param]` attribute at all.
pub(crate) fn parse_field_options(attrs: &[Attribute]) -> syn::Result<Option<FieldOptions>> {
    let mut options: Option<FieldOptions> = None;

    for attr in attrs {
        if !attr.path().is_ident("param") {
            continue;
        }
        let options = options.get_or_insert_with(FieldOptions::default);

        let mut parent = None;
        let mut path: Option<LitStr> = None;
        let mut required = false;
        let mut nested = false;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("path") {
                path = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("parent") {
                parent = Some(meta.value()?.parse::<Path>()?);
            } else if meta.path.is_ident("required") {
                required = true;
            } else if meta.path.is_ident("nested") {
                nested = true;
            } else {
                return Err(meta.error(
                    "unknown `param` key, expected one of `path`, `parent`, `required`, `nested`",
                ));
            }
            Ok(())
        })?;

        options.nested |= nested;

        match path {
            Some(lit) => options.paths.push(PathAttr {
                parent,
                keys: split_keys(&lit)?,
                required,
                span: lit.span(),
            }),
            None if parent.is_some() || required || !nested => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "missing `path = \"...\"` in `param` attribute",
                ));
            }
            None => {}
        }
    }

    Ok(options)
}

/// Split a dotted path literal into keys.
pub(crate) fn split_keys(lit: &LitStr) -> syn::Result<Vec<String>> {
    let value = lit.value();
    let keys: Vec<String> = value.split('.').map(str::to_string).collect();
    if keys.iter().any(String::is_empty) {
        return Err(syn::Error::new_spanned(
            lit,
            format!("path `{value}` contains an empty key"),
        ));
    }
    Ok(keys)
}

/// Shape of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeShape {
    /// The type is `Option<_>`.
    pub(crate) optional: bool,
    /// The type, or the type inside the `Option`, is `Vec<_>`.
    pub(crate) list: bool,
}

impl TypeShape {
    /// Inspect `Option<T>`, `Vec<T>` and `Option<Vec<T>>`.
    pub(crate) fn of(ty: &Type) -> Self {
        match option_inner(ty) {
            Some(inner) => Self {
                optional: true,
                list: is_vec_type(inner),
            },
            None => Self {
                optional: false,
                list: is_vec_type(ty),
            },
        }
    }
}

/// The `T` of an `Option<T>`.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

/// Check if a type is `Vec<T>`.
fn is_vec_type(ty: &Type) -> bool {
    matches!(ty, Type::Path(type_path)
        if type_path.path.segments.last()
            .is_some_and(|seg| seg.ident == "Vec"))
}
