//! Implementation of the `#[derive(Record)]` macro.
//!
//! A record is a named-field struct with a fixed field set, populated once
//! by `new` and read through getters. The derive also emits the type tag
//! implementations of `#[derive(Tagged)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, FieldsNamed, parse_quote};

use crate::tagged::{TagAttributes, generate_tag_impls, with_predicate};

/// Main implementation of the Record derive macro.
pub fn derive_record_impl(input: &DeriveInput) -> TokenStream2 {
    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => named_fields,
            Fields::Unnamed(_) | Fields::Unit => {
                return syn::Error::new_spanned(
                    &input.ident,
                    "Record can only be derived for structs with named fields.",
                )
                .to_compile_error();
            }
        },
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs, not enums. Use #[derive(Tagged)] for enums.",
            )
            .to_compile_error();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Record cannot be derived for unions.")
                .to_compile_error();
        }
    };

    let options = match TagAttributes::from_attributes(&input.attrs) {
        Ok(options) => options,
        Err(error) => return error.to_compile_error(),
    };

    let methods = generate_record_methods(input, fields);
    let display = generate_display(input, fields);
    let tags = generate_tag_impls(input, &options);

    quote! {
        #methods
        #display
        #tags
    }
}

/// Generates `new`, the getters, `as_container` and `copy_with`.
fn generate_record_methods(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream2 {
    let name = &input.ident;
    let field_names: Vec<_> = fields.named.iter().filter_map(|field| field.ident.as_ref()).collect();
    let field_types: Vec<_> = fields.named.iter().map(|field| &field.ty).collect();

    let getters = field_names.iter().zip(&field_types).map(|(field_name, field_type)| {
        quote! {
            /// Returns the field value.
            #[inline]
            #[must_use]
            pub const fn #field_name(&self) -> &#field_type {
                &self.#field_name
            }
        }
    });

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let clone_where_clause = with_predicate(where_clause, &parse_quote!(Self: ::core::clone::Clone));

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            /// Creates the record from every field.
            #[allow(clippy::too_many_arguments)]
            #[must_use]
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self { #(#field_names),* }
            }

            #(#getters)*
        }

        impl #impl_generics #name #type_generics #clone_where_clause {
            /// Wraps a copy of the record in a `Container`.
            #[must_use]
            pub fn as_container(&self) -> ::casebox::container::Container<Self> {
                ::casebox::container::Container::new(::core::clone::Clone::clone(self))
            }

            /// Returns a copy with `change` applied; the receiver is unchanged.
            #[must_use]
            pub fn copy_with<F>(&self, change: F) -> Self
            where
                F: ::core::ops::FnOnce(&mut Self),
            {
                let mut copy = ::core::clone::Clone::clone(self);
                change(&mut copy);
                copy
            }
        }
    }
}

/// Generates `Display` as `Name { field: value, .. }`.
fn generate_display(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream2 {
    let name = &input.ident;
    let name_text = name.to_string();

    let entries = fields.named.iter().filter_map(|field| field.ident.as_ref()).map(|field_name| {
        let label = field_name.to_string();
        quote! { .field(#label, &self.#field_name) }
    });

    let mut where_clause = input.generics.where_clause.clone();
    for field in &fields.named {
        let field_type = &field.ty;
        where_clause = Some(with_predicate(
            where_clause.as_ref(),
            &parse_quote!(#field_type: ::core::fmt::Debug),
        ));
    }

    let (impl_generics, type_generics, _) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::fmt::Display for #name #type_generics #where_clause {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.debug_struct(#name_text) #(#entries)* .finish()
            }
        }
    }
}
