//! Rust to PostgreSQL type inference
//!
//! Two inference paths are provided: the `PgMapped` trait for generic,
//! compile-time-checked call sites, and a string-keyed lookup for
//! configuration code that only has a type name in hand.

use crate::errors::TypeMappingError;
use crate::pg_type::PgType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// Rust types with a known PostgreSQL column type
///
/// Implemented for the supported scalar types; `Option<T>` maps to the same
/// tag as `T` (nullability is not part of the column type tag).
pub trait PgMapped {
    const PG_TYPE: PgType;
}

impl PgMapped for Uuid {
    const PG_TYPE: PgType = PgType::Uuid;
}

impl PgMapped for String {
    const PG_TYPE: PgType = PgType::Varchar;
}

impl PgMapped for &str {
    const PG_TYPE: PgType = PgType::Varchar;
}

impl PgMapped for i8 {
    const PG_TYPE: PgType = PgType::SmallInt;
}

impl PgMapped for i16 {
    const PG_TYPE: PgType = PgType::SmallInt;
}

impl PgMapped for i32 {
    const PG_TYPE: PgType = PgType::Integer;
}

impl PgMapped for u16 {
    const PG_TYPE: PgType = PgType::Integer;
}

impl PgMapped for i64 {
    const PG_TYPE: PgType = PgType::BigInt;
}

impl PgMapped for u32 {
    const PG_TYPE: PgType = PgType::BigInt;
}

impl PgMapped for u64 {
    // PostgreSQL has no native u64
    const PG_TYPE: PgType = PgType::Numeric;
}

impl PgMapped for f32 {
    const PG_TYPE: PgType = PgType::Real;
}

impl PgMapped for f64 {
    const PG_TYPE: PgType = PgType::DoublePrecision;
}

impl PgMapped for bool {
    const PG_TYPE: PgType = PgType::Boolean;
}

impl PgMapped for DateTime<Utc> {
    const PG_TYPE: PgType = PgType::TimestampTz;
}

impl PgMapped for NaiveDateTime {
    const PG_TYPE: PgType = PgType::TimestampTz;
}

impl PgMapped for NaiveDate {
    const PG_TYPE: PgType = PgType::Date;
}

impl PgMapped for serde_json::Value {
    const PG_TYPE: PgType = PgType::Jsonb;
}

impl<T: PgMapped> PgMapped for Option<T> {
    const PG_TYPE: PgType = T::PG_TYPE;
}

/// Map a Rust type name to a PostgreSQL type tag
///
/// Unknown type names are a configuration error, surfaced at the call site.
pub fn pg_type_for_rust(rust_type: &str) -> Result<PgType, TypeMappingError> {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(' ', "");
    let inner = normalized
        .strip_prefix("Option<")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(&normalized);

    match inner {
        "Uuid" | "uuid::Uuid" => Ok(PgType::Uuid),
        "String" | "&str" | "alloc::string::String" => Ok(PgType::Varchar),
        "i8" | "i16" => Ok(PgType::SmallInt),
        "i32" | "u16" => Ok(PgType::Integer),
        "i64" | "u32" => Ok(PgType::BigInt),
        "u64" => Ok(PgType::Numeric),
        "f32" => Ok(PgType::Real),
        "f64" => Ok(PgType::DoublePrecision),
        "bool" => Ok(PgType::Boolean),
        "chrono::DateTime<chrono::Utc>" | "DateTime<Utc>" | "chrono::NaiveDateTime"
        | "NaiveDateTime" => Ok(PgType::TimestampTz),
        "chrono::NaiveDate" | "NaiveDate" => Ok(PgType::Date),
        "rust_decimal::Decimal" | "bigdecimal::BigDecimal" => Ok(PgType::Numeric),
        "serde_json::Value" | "Value" => Ok(PgType::Jsonb),
        other => Err(TypeMappingError::UnsupportedType(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_inference_for_scalars() {
        assert_eq!(Uuid::PG_TYPE, PgType::Uuid);
        assert_eq!(String::PG_TYPE, PgType::Varchar);
        assert_eq!(i16::PG_TYPE, PgType::SmallInt);
        assert_eq!(i64::PG_TYPE, PgType::BigInt);
        assert_eq!(bool::PG_TYPE, PgType::Boolean);
        assert_eq!(<DateTime<Utc>>::PG_TYPE, PgType::TimestampTz);
        assert_eq!(serde_json::Value::PG_TYPE, PgType::Jsonb);
    }

    #[test]
    fn test_option_maps_to_inner_type() {
        assert_eq!(<Option<Uuid>>::PG_TYPE, PgType::Uuid);
        assert_eq!(<Option<String>>::PG_TYPE, PgType::Varchar);
        assert_eq!(<Option<Option<i32>>>::PG_TYPE, PgType::Integer);
    }

    #[test]
    fn test_string_inference_known_types() {
        assert_eq!(pg_type_for_rust("Uuid").unwrap(), PgType::Uuid);
        assert_eq!(pg_type_for_rust("String").unwrap(), PgType::Varchar);
        assert_eq!(pg_type_for_rust("i16").unwrap(), PgType::SmallInt);
        assert_eq!(
            pg_type_for_rust("chrono::DateTime<chrono::Utc>").unwrap(),
            PgType::TimestampTz
        );
    }

    #[test]
    fn test_string_inference_strips_option() {
        assert_eq!(pg_type_for_rust("Option<Uuid>").unwrap(), PgType::Uuid);
        assert_eq!(pg_type_for_rust("Option < i64 >").unwrap(), PgType::BigInt);
    }

    #[test]
    fn test_string_inference_fails_at_call_time() {
        let result = pg_type_for_rust("std::net::IpAddr");
        assert_eq!(
            result.unwrap_err(),
            TypeMappingError::UnsupportedType("std::net::IpAddr".to_string())
        );

        // No silent fallback for vague names either
        assert!(pg_type_for_rust("Vec<u8>").is_err());
    }
}
