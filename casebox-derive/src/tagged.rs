//! Implementation of the `#[derive(Tagged)]` macro.
//!
//! Generates `StaticTagged`, `Tagged` and `Matchable` implementations that
//! all report one constant `TypeTag`.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Attribute, DeriveInput, LitStr, Path, Token, WhereClause, parse_quote};

/// Options read from `#[tagged(name = "...", parent = PATH)]`.
#[derive(Debug, Default)]
pub struct TagAttributes {
    pub name: Option<LitStr>,
    pub parent: Option<Path>,
}

impl TagAttributes {
    /// Collects the options from every `#[tagged(...)]` attribute.
    pub fn from_attributes(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();
        for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("tagged")) {
            attribute.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    options.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("parent") {
                    options.parent = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("expected `name = \"...\"` or `parent = PATH`"))
                }
            })?;
        }
        Ok(options)
    }
}

/// Main implementation of the Tagged derive macro.
pub fn derive_tagged_impl(input: &DeriveInput) -> TokenStream2 {
    match TagAttributes::from_attributes(&input.attrs) {
        Ok(options) => generate_tag_impls(input, &options),
        Err(error) => error.to_compile_error(),
    }
}

/// Generates the three tag trait implementations for `input`.
pub fn generate_tag_impls(input: &DeriveInput, options: &TagAttributes) -> TokenStream2 {
    let name = &input.ident;
    let tag_name = options
        .name
        .clone()
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));

    let tag = match &options.parent {
        Some(parent) => quote! { ::casebox::matching::TypeTag::child(#tag_name, &#parent) },
        None => quote! { ::casebox::matching::TypeTag::root(#tag_name) },
    };

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let debug_where_clause = with_predicate(where_clause, &parse_quote!(Self: ::core::fmt::Debug));

    quote! {
        impl #impl_generics ::casebox::matching::StaticTagged for #name #type_generics #where_clause {
            const TYPE_TAG: ::casebox::matching::TypeTag = #tag;
        }

        impl #impl_generics ::casebox::matching::Tagged for #name #type_generics #debug_where_clause {
            fn type_tag(&self) -> ::casebox::matching::TypeTag {
                <Self as ::casebox::matching::StaticTagged>::TYPE_TAG
            }
        }

        impl #impl_generics ::casebox::matching::Matchable for #name #type_generics #where_clause {
            fn type_tag(&self) -> ::core::option::Option<::casebox::matching::TypeTag> {
                ::core::option::Option::Some(<Self as ::casebox::matching::StaticTagged>::TYPE_TAG)
            }
        }
    }
}

/// Returns `where_clause` extended with `predicate`.
pub fn with_predicate(
    where_clause: Option<&WhereClause>,
    predicate: &syn::WherePredicate,
) -> WhereClause {
    let mut extended = where_clause.cloned().unwrap_or_else(|| WhereClause {
        where_token: Token![where](Span::call_site()),
        predicates: Punctuated::new(),
    });
    extended.predicates.push(predicate.clone());
    extended
}
