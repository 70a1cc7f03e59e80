//! `#[derive(Diffable)]`: structural field-by-field comparison for record
//! and enum types.
//!
//! The generated impl compares every declared field in declaration order and
//! feeds the ordered comparisons through `attest_diff::diff_record`. Enums
//! compare per-variant; two values on different variants fall back to a raw
//! `OtherDifference` without recursing into either side.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields, Index};

#[proc_macro_derive(Diffable)]
pub fn derive_diffable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let type_name = name.to_string();

    let (diff_body, show_body) = match &input.data {
        Data::Struct(data) => struct_bodies(&type_name, &data.fields),
        Data::Enum(data) => enum_bodies(&type_name, data),
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "Diffable cannot be derived for unions")
                .to_compile_error()
                .into();
        }
    };

    // Every type parameter needs its own strategy for the recursive field
    // comparisons to resolve.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::attest_diff::Diffable));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::attest_diff::Diffable for #name #ty_generics #where_clause {
            // Single-variant enums make the mismatch arm unreachable.
            #[allow(unreachable_patterns)]
            fn diff(actual: &Self, expected: &Self) -> ::attest_diff::ComparisonResult {
                #diff_body
            }

            fn show(value: &Self) -> ::std::string::String {
                #show_body
            }
        }
    };
    TokenStream::from(expanded)
}

/// Per-field accessors for a struct body: `(display name, accessor)` pairs.
fn field_accessors(fields: &Fields) -> Vec<(String, proc_macro2::TokenStream)> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|f| {
                let ident = f.ident.as_ref().expect("named field");
                (ident.to_string(), quote! { #ident })
            })
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| {
                let index = Index::from(i);
                (i.to_string(), quote! { #index })
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

fn struct_bodies(
    type_name: &str,
    fields: &Fields,
) -> (proc_macro2::TokenStream, proc_macro2::TokenStream) {
    let accessors = field_accessors(fields);

    let comparisons = accessors.iter().map(|(fname, access)| {
        quote! {
            ::attest_diff::FieldComparison::new(
                #fname,
                ::attest_diff::Diffable::diff(&actual.#access, &expected.#access),
            )
        }
    });
    let diff_body = quote! {
        ::attest_diff::diff_record(#type_name, ::std::vec![#(#comparisons),*])
    };

    let show_body = if accessors.is_empty() {
        quote! { ::std::string::ToString::to_string(#type_name) }
    } else {
        let parts = accessors.iter().map(|(fname, access)| {
            quote! {
                ::std::format!("{}: {}", #fname, ::attest_diff::Diffable::show(&value.#access))
            }
        });
        quote! {
            let parts: ::std::vec::Vec<::std::string::String> = ::std::vec![#(#parts),*];
            ::std::format!("{}({})", #type_name, parts.join(", "))
        }
    };

    (diff_body, show_body)
}

fn enum_bodies(
    type_name: &str,
    data: &DataEnum,
) -> (proc_macro2::TokenStream, proc_macro2::TokenStream) {
    if data.variants.is_empty() {
        let body = quote! { ::std::unreachable!("empty enum has no values") };
        return (body.clone(), body);
    }

    let mut diff_arms = Vec::new();
    let mut show_arms = Vec::new();

    for variant in &data.variants {
        let vid = &variant.ident;
        let label = format!("{}::{}", type_name, vid);

        match &variant.fields {
            Fields::Named(named) => {
                let idents: Vec<_> = named
                    .named
                    .iter()
                    .map(|f| f.ident.clone().expect("named field"))
                    .collect();
                let names: Vec<String> = idents.iter().map(|i| i.to_string()).collect();
                let a_binds: Vec<_> = idents.iter().map(|i| format_ident!("a_{}", i)).collect();
                let e_binds: Vec<_> = idents.iter().map(|i| format_ident!("e_{}", i)).collect();

                diff_arms.push(quote! {
                    (
                        Self::#vid { #(#idents: #a_binds),* },
                        Self::#vid { #(#idents: #e_binds),* },
                    ) => ::attest_diff::diff_record(#label, ::std::vec![
                        #(::attest_diff::FieldComparison::new(
                            #names,
                            ::attest_diff::Diffable::diff(#a_binds, #e_binds),
                        )),*
                    ]),
                });
                show_arms.push(quote! {
                    Self::#vid { #(#idents),* } => {
                        let parts: ::std::vec::Vec<::std::string::String> = ::std::vec![
                            #(::std::format!(
                                "{}: {}",
                                #names,
                                ::attest_diff::Diffable::show(#idents),
                            )),*
                        ];
                        ::std::format!("{}({})", #label, parts.join(", "))
                    }
                });
            }
            Fields::Unnamed(unnamed) => {
                let count = unnamed.unnamed.len();
                let names: Vec<String> = (0..count).map(|i| i.to_string()).collect();
                let a_binds: Vec<_> = (0..count).map(|i| format_ident!("a_{}", i)).collect();
                let e_binds: Vec<_> = (0..count).map(|i| format_ident!("e_{}", i)).collect();

                diff_arms.push(quote! {
                    (
                        Self::#vid(#(#a_binds),*),
                        Self::#vid(#(#e_binds),*),
                    ) => ::attest_diff::diff_record(#label, ::std::vec![
                        #(::attest_diff::FieldComparison::new(
                            #names,
                            ::attest_diff::Diffable::diff(#a_binds, #e_binds),
                        )),*
                    ]),
                });
                show_arms.push(quote! {
                    Self::#vid(#(#a_binds),*) => {
                        let parts: ::std::vec::Vec<::std::string::String> = ::std::vec![
                            #(::attest_diff::Diffable::show(#a_binds)),*
                        ];
                        ::std::format!("{}({})", #label, parts.join(", "))
                    }
                });
            }
            Fields::Unit => {
                diff_arms.push(quote! {
                    (Self::#vid, Self::#vid) =>
                        ::attest_diff::diff_record(#label, ::std::vec::Vec::new()),
                });
                show_arms.push(quote! {
                    Self::#vid => ::std::string::ToString::to_string(#label),
                });
            }
        }
    }

    // Mismatched variants never recurse into either side.
    let diff_body = quote! {
        match (actual, expected) {
            #(#diff_arms)*
            _ => ::attest_diff::ComparisonResult::OtherDifference {
                actual: <Self as ::attest_diff::Diffable>::show(actual),
                expected: <Self as ::attest_diff::Diffable>::show(expected),
                type_name: ::std::option::Option::None,
            },
        }
    };
    let show_body = quote! {
        match value {
            #(#show_arms)*
        }
    };

    (diff_body, show_body)
}
