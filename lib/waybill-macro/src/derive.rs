//! `#[derive(Parameters)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, Ident, Type, parse2};

use crate::attrs::{FieldOptions, PathAttr, TypeShape, parse_field_options, parse_struct_options};

/// How the engine resolves a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Scalar,
    Nested,
    NestedList,
}

/// A mappable field.
struct MappedField {
    ident: Ident,
    shape: TypeShape,
    kind: Kind,
    paths: Vec<PathAttr>,
}

impl MappedField {
    fn new(ident: Ident, ty: &Type, options: FieldOptions) -> Self {
        let shape = TypeShape::of(ty);
        let kind = match (options.nested, shape.list) {
            (false, _) => Kind::Scalar,
            (true, false) => Kind::Nested,
            (true, true) => Kind::NestedList,
        };
        Self {
            ident,
            shape,
            kind,
            paths: options.paths,
        }
    }

    fn kind_tokens(&self) -> TokenStream {
        match self.kind {
            Kind::Scalar => quote!(::waybill::FieldKind::Scalar),
            Kind::Nested => quote!(::waybill::FieldKind::Nested),
            Kind::NestedList => quote!(::waybill::FieldKind::NestedList),
        }
    }

    fn decl_tokens(&self) -> TokenStream {
        let name = self.ident.to_string();
        let kind = self.kind_tokens();
        let paths = self.paths.iter().map(path_tokens);
        quote! {
            ::waybill::FieldDecl {
                name: #name,
                kind: #kind,
                paths: &[#(#paths),*],
            }
        }
    }

    fn value_tokens(&self) -> TokenStream {
        let ident = &self.ident;
        match (self.kind, self.shape.optional) {
            (Kind::Scalar, true) => {
                quote!(::waybill::FieldValue::optional_scalar(self.#ident.as_ref()))
            }
            (Kind::Scalar, false) => quote!(::waybill::FieldValue::scalar(&self.#ident)),
            (Kind::Nested, true) => quote! {
                ::core::result::Result::Ok(::waybill::FieldValue::optional_nested(self.#ident.as_ref()))
            },
            (Kind::Nested, false) => {
                quote!(::core::result::Result::Ok(::waybill::FieldValue::nested(&self.#ident)))
            }
            (Kind::NestedList, true) => quote! {
                ::core::result::Result::Ok(::waybill::FieldValue::optional_nested_list(self.#ident.as_deref()))
            },
            (Kind::NestedList, false) => quote! {
                ::core::result::Result::Ok(::waybill::FieldValue::nested_list(self.#ident.as_slice()))
            },
        }
    }
}

fn path_tokens(path: &PathAttr) -> TokenStream {
    let keys = &path.keys;
    let necessity = if path.required {
        quote!(::waybill::Necessity::Required)
    } else {
        quote!(::waybill::Necessity::Optional)
    };
    match &path.parent {
        None => quote!(::waybill::PathDecl::root(&[#(#keys),*], #necessity)),
        Some(parent) => quote! {
            ::waybill::PathDecl::nested_in(
                <#parent as ::waybill::ParameterType>::PARAM_TYPE,
                &[#(#keys),*],
                #necessity,
            )
        },
    }
}

/// Expand the `#[derive(Parameters)]` macro.
pub(crate) fn expand_parameters(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let options = parse_struct_options(&input.attrs)?;
    let type_name = options.name.unwrap_or_else(|| name.to_string());

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Parameters derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Parameters derive only supports structs",
            ));
        }
    };

    let mut mapped = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        if let Some(options) = parse_field_options(&field.attrs)? {
            mapped.push(MappedField::new(ident, &field.ty, options));
        }
    }

    check_declarations(&mapped)?;

    let ident_str = name.to_string();
    // Generic schemas are checked when `schema` is instantiated
    let eager_check = input.generics.params.is_empty().then(|| {
        quote! {
            const _: () = <#name as ::waybill::ParameterType>::WELL_FORMED;
        }
    });

    let decls = mapped.iter().map(MappedField::decl_tokens);
    let arms = mapped.iter().enumerate().map(|(index, field)| {
        let value = field.value_tokens();
        quote!(#index => #value,)
    });

    Ok(quote! {
        impl #impl_generics ::waybill::ParameterType for #name #ty_generics #where_clause {
            const PARAM_TYPE: ::waybill::ParamType = ::waybill::ParamType::qualified(
                #type_name,
                ::core::concat!(::core::module_path!(), "::", #ident_str),
            );
            const SCHEMA: &'static ::waybill::ParamSchema = &::waybill::ParamSchema {
                param_type: <Self as ::waybill::ParameterType>::PARAM_TYPE,
                fields: &[#(#decls),*],
            };
        }

        impl #impl_generics ::waybill::Parameters for #name #ty_generics #where_clause {
            fn schema(&self) -> &'static ::waybill::ParamSchema {
                let () = <Self as ::waybill::ParameterType>::WELL_FORMED;
                <Self as ::waybill::ParameterType>::SCHEMA
            }

            fn field_value(
                &self,
                index: usize,
            ) -> ::waybill::Result<::waybill::FieldValue<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::waybill::Error::invalid_schema(
                        ::std::format!("{} has no field at index {}", #type_name, index),
                    )),
                }
            }
        }

        #eager_check
    })
}

/// Reject declarations that can never produce a well-formed payload.
///
/// Parents are compared by their spelling here; `ParameterType::WELL_FORMED`
/// compares them by identity once paths are resolved.
fn check_declarations(fields: &[MappedField]) -> syn::Result<()> {
    let mut seen: Vec<(&MappedField, &PathAttr)> = Vec::new();

    for field in fields {
        for (index, path) in field.paths.iter().enumerate() {
            let context = path.context_key();

            if field
                .paths
                .iter()
                .take(index)
                .any(|other| other.context_key() == context)
            {
                return Err(syn::Error::new(
                    path.span,
                    format!(
                        "field `{}` declares more than one path for {}",
                        field.ident,
                        path.context_label()
                    ),
                ));
            }

            for (other_field, other) in &seen {
                if other.context_key() != context {
                    continue;
                }
                if other.keys == path.keys {
                    if other.required && path.required {
                        return Err(collision(other_field, field, path, "both are required"));
                    }
                    if other_field.kind != field.kind {
                        return Err(collision(other_field, field, path, "their shapes differ"));
                    }
                } else if blocks(other_field.kind, &other.keys, &path.keys)
                    || blocks(field.kind, &path.keys, &other.keys)
                {
                    return Err(collision(
                        other_field,
                        field,
                        path,
                        "a terminal value sits on an intermediate key",
                    ));
                }
            }
        }
        seen.extend(field.paths.iter().map(|path| (field, path)));
    }

    Ok(())
}

fn blocks(kind: Kind, shorter: &[String], longer: &[String]) -> bool {
    kind != Kind::Nested && shorter.len() < longer.len() && longer.starts_with(shorter)
}

fn collision(first: &MappedField, second: &MappedField, path: &PathAttr, why: &str) -> syn::Error {
    syn::Error::new(
        path.span,
        format!(
            "fields `{}` and `{}` collide on `{}` for {}: {why}",
            first.ident,
            second.ident,
            path.dotted(),
            path.context_label()
        ),
    )
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    fn expand_err(input: TokenStream) -> String {
        let_assert!(Err(err) = expand_parameters(input));
        err.to_string()
    }

    #[test]
    fn expands_address() {
        let output = expand_parameters(quote! {
            struct CreateAddress {
                #[param(path = "address.street1", required)]
                #[param(parent = CreateShipment, path = "street1", required)]
                street1: Option<String>,
                #[param(path = "verify")]
                verify: Option<bool>,
                scratch: u32,
            }
        })
        .expect("expand")
        .to_string();

        check!(output.contains("impl :: waybill :: ParameterType for CreateAddress"));
        check!(output.contains("impl :: waybill :: Parameters for CreateAddress"));
        check!(output.contains("ParamType :: qualified (\"CreateAddress\""));
        check!(output.contains("module_path ! () , \"::\" , \"CreateAddress\""));
        check!(output.contains(
            "const _ : () = < CreateAddress as :: waybill :: ParameterType > :: WELL_FORMED"
        ));
        check!(output.contains("< CreateShipment as :: waybill :: ParameterType > :: PARAM_TYPE"));
        check!(output.contains("optional_scalar (self . street1 . as_ref ())"));
        check!(!output.contains("scratch"));
    }

    #[test]
    fn name_override() {
        let output = expand_parameters(quote! {
            #[params(name = "Address")]
            struct CreateAddress {
                #[param(path = "street1")]
                street1: String,
            }
        })
        .expect("expand")
        .to_string();
        check!(output.contains("ParamType :: qualified (\"Address\""));
        check!(output.contains("\"::\" , \"CreateAddress\""));
        check!(output.contains("FieldValue :: scalar (& self . street1)"));
    }

    #[test]
    fn generic_types_check_schema_on_use() {
        let output = expand_parameters(quote! {
            struct Labeled<T: ::serde::Serialize> {
                #[param(path = "label")]
                label: Option<T>,
            }
        })
        .expect("expand")
        .to_string();

        check!(!output.contains("const _ : ()"));
        check!(output.contains("let () = < Self as :: waybill :: ParameterType > :: WELL_FORMED"));
    }

    #[test]
    fn nested_shapes() {
        let output = expand_parameters(quote! {
            struct CreateOrder {
                #[param(nested, path = "order.to_address")]
                to_address: Option<CreateAddress>,
                #[param(nested, path = "order.shipments", required)]
                shipments: Vec<CreateShipment>,
                #[param(nested, path = "order.returns")]
                returns: Option<Vec<CreateShipment>>,
            }
        })
        .expect("expand")
        .to_string();

        check!(output.contains("optional_nested (self . to_address . as_ref ())"));
        check!(output.contains("nested_list (self . shipments . as_slice ())"));
        check!(output.contains("optional_nested_list (self . returns . as_deref ())"));
        check!(output.contains("FieldKind :: NestedList"));
    }

    #[test]
    fn rejects_non_structs() {
        let message = expand_err(quote! {
            enum Carrier { Usps, Ups }
        });
        check!(message.contains("only supports structs"));

        let message = expand_err(quote! {
            struct Weight(f64);
        });
        check!(message.contains("named fields"));
    }

    #[test]
    fn rejects_two_paths_for_one_context() {
        let message = expand_err(quote! {
            struct CreateAddress {
                #[param(parent = CreateShipment, path = "street1")]
                #[param(parent = CreateShipment, path = "street")]
                street1: Option<String>,
            }
        });
        check!(message.contains("more than one path for parent `CreateShipment`"));
    }

    #[test]
    fn rejects_colliding_required_fields() {
        let message = expand_err(quote! {
            struct CreateAddress {
                #[param(path = "address.email", required)]
                email: Option<String>,
                #[param(path = "address.email", required)]
                contact: Option<String>,
            }
        });
        check!(message.contains("`email` and `contact` collide on `address.email`"));
        check!(message.contains("both are required"));
    }

    #[test]
    fn allows_optional_collisions_in_other_contexts() {
        let result = expand_parameters(quote! {
            struct CreateAddress {
                #[param(path = "address.email", required)]
                email: Option<String>,
                #[param(path = "address.email")]
                #[param(parent = CreateShipment, path = "email", required)]
                contact: Option<String>,
            }
        });
        check!(result.is_ok());
    }

    #[test]
    fn rejects_terminal_on_intermediate_key() {
        let message = expand_err(quote! {
            struct CreateShipment {
                #[param(path = "shipment.to_address")]
                to_address_id: Option<String>,
                #[param(path = "shipment.to_address.street1")]
                street1: Option<String>,
            }
        });
        check!(message.contains("intermediate key"));
    }
}
