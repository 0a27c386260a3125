//! Procedural macro for generating column mappings
//!
//! This crate provides the `AutoMap` derive, which registers every field
//! declared on a struct with its `MapperOptions` at configuration time.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod codegen;
mod parsing;

/// Derive macro for the `AutoMap` trait
///
/// Generates a `field_mapper::AutoMap` implementation registering one column
/// per named field: the column name is the snake_case form of the field name
/// and the database type is inferred from the field's declared type. Field
/// names and types are extracted here, at compile time, so auto-mapping has
/// no per-request cost.
///
/// Usage:
/// ```ignore
/// use mapper_derive::AutoMap;
///
/// #[derive(AutoMap)]
/// pub struct Order {
///     pub id: Uuid,
///
///     #[column(name = "customer")]
///     pub customer_name: String,
///
///     #[column(pg_type = "SMALLINT")]
///     pub status: OrderStatus,
///
///     #[column(skip)]
///     pub audit: AuditFields,
/// }
/// ```
#[proc_macro_derive(AutoMap, attributes(column))]
pub fn derive_auto_map(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match parsing::parse_entity_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    codegen::generate_auto_map_impl(&input.ident, &fields).into()
}
