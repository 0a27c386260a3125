//! Parsing of `#[column]` field attributes for the AutoMap derive

use syn::{Data, DataStruct, DeriveInput, Error, Field, Fields, Ident, LitStr, Result, Type};

/// One field of the deriving struct, with its mapping attributes resolved
pub struct MappedField {
    pub ident: Ident,
    pub ty: Type,
    pub column_name: Option<String>,
    pub pg_type: Option<String>,
    pub skip: bool,
}

/// Extract the named fields of the deriving struct
///
/// Tuple structs, unit structs and enums are rejected with a compile error.
pub fn parse_entity_fields(input: &DeriveInput) -> Result<Vec<MappedField>> {
    let named = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        Data::Struct(_) => {
            return Err(Error::new_spanned(
                input,
                "AutoMap requires a struct with named fields",
            ))
        }
        _ => {
            return Err(Error::new_spanned(
                input,
                "AutoMap can only be derived for structs",
            ))
        }
    };

    named.iter().map(parse_field).collect()
}

fn parse_field(field: &Field) -> Result<MappedField> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;

    let mut mapped = MappedField {
        ident,
        ty: field.ty.clone(),
        column_name: None,
        pg_type: None,
        skip: false,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("column") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                mapped.skip = true;
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                mapped.column_name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("pg_type") {
                let lit: LitStr = meta.value()?.parse()?;
                mapped.pg_type = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported column attribute; expected skip, name, or pg_type"))
            }
        })?;
    }

    Ok(mapped)
}
