//! Code generation for the AutoMap derive
//!
//! Generated code references bare `field_mapper::` and `pg_mapping::` paths;
//! the root crate's prelude re-exports both member crates so the paths
//! resolve at the call site.

use crate::parsing::MappedField;
use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

pub fn generate_auto_map_impl(name: &Ident, fields: &[MappedField]) -> TokenStream {
    let registrations = fields
        .iter()
        .filter(|field| !field.skip)
        .map(|field| {
            let property = field.ident.to_string();
            let ty = &field.ty;
            let column = field
                .column_name
                .clone()
                .unwrap_or_else(|| property.to_snake_case());

            match &field.pg_type {
                Some(token) => quote! {
                    options.map_column_as::<#ty>(
                        #property,
                        #column,
                        pg_mapping::PgType::parse(#token)?,
                    )?;
                },
                None => quote! {
                    options.map_column_named::<#ty>(#property, #column)?;
                },
            }
        })
        .collect::<Vec<_>>();

    quote! {
        impl field_mapper::AutoMap for #name {
            fn auto_map(
                options: &mut field_mapper::MapperOptions<Self>,
            ) -> std::result::Result<(), field_mapper::MapperError> {
                #(#registrations)*
                Ok(())
            }
        }
    }
}
