//! PostgreSQL type tags
//!
//! This module provides the closed set of database type tags a column
//! mapping can carry, plus conversion to and from DDL tokens.

use crate::errors::TypeMappingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of PostgreSQL column types supported by the mapping layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PgType {
    Uuid,
    Varchar,
    Text,
    SmallInt,
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    Numeric,
    Boolean,
    TimestampTz,
    Date,
    Jsonb,
}

impl PgType {
    /// DDL token for this type
    pub fn as_sql(&self) -> &'static str {
        match self {
            PgType::Uuid => "UUID",
            PgType::Varchar => "VARCHAR",
            PgType::Text => "TEXT",
            PgType::SmallInt => "SMALLINT",
            PgType::Integer => "INTEGER",
            PgType::BigInt => "BIGINT",
            PgType::Real => "REAL",
            PgType::DoublePrecision => "DOUBLE PRECISION",
            PgType::Numeric => "NUMERIC",
            PgType::Boolean => "BOOLEAN",
            PgType::TimestampTz => "TIMESTAMP WITH TIME ZONE",
            PgType::Date => "DATE",
            PgType::Jsonb => "JSONB",
        }
    }

    /// Parse a DDL token back into a type tag
    ///
    /// Used by configuration-time code (e.g. derive attributes) only;
    /// unknown tokens are a configuration error.
    pub fn parse(token: &str) -> Result<Self, TypeMappingError> {
        match token.trim().to_ascii_uppercase().as_str() {
            "UUID" => Ok(PgType::Uuid),
            "VARCHAR" => Ok(PgType::Varchar),
            "TEXT" => Ok(PgType::Text),
            "SMALLINT" => Ok(PgType::SmallInt),
            "INTEGER" | "INT" => Ok(PgType::Integer),
            "BIGINT" => Ok(PgType::BigInt),
            "REAL" => Ok(PgType::Real),
            "DOUBLE PRECISION" => Ok(PgType::DoublePrecision),
            "NUMERIC" | "DECIMAL" => Ok(PgType::Numeric),
            "BOOLEAN" | "BOOL" => Ok(PgType::Boolean),
            "TIMESTAMP WITH TIME ZONE" | "TIMESTAMPTZ" => Ok(PgType::TimestampTz),
            "DATE" => Ok(PgType::Date),
            "JSONB" => Ok(PgType::Jsonb),
            other => Err(TypeMappingError::UnknownSqlType(other.to_string())),
        }
    }

    /// Get size hint for this type (for optimization)
    pub fn size_hint(&self) -> Option<usize> {
        match self {
            PgType::Boolean => Some(1),
            PgType::SmallInt => Some(2),
            PgType::Integer => Some(4),
            PgType::BigInt => Some(8),
            PgType::Real => Some(4),
            PgType::DoublePrecision => Some(8),
            PgType::Uuid => Some(16),
            PgType::Date => Some(4),
            PgType::TimestampTz => Some(8),
            _ => None, // Variable size types
        }
    }
}

impl fmt::Display for PgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ddl_tokens() {
        let tags = [
            PgType::Uuid,
            PgType::Varchar,
            PgType::Text,
            PgType::SmallInt,
            PgType::Integer,
            PgType::BigInt,
            PgType::Real,
            PgType::DoublePrecision,
            PgType::Numeric,
            PgType::Boolean,
            PgType::TimestampTz,
            PgType::Date,
            PgType::Jsonb,
        ];

        for tag in tags {
            assert_eq!(PgType::parse(tag.as_sql()).unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(PgType::parse("smallint").unwrap(), PgType::SmallInt);
        assert_eq!(PgType::parse(" timestamptz ").unwrap(), PgType::TimestampTz);
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        let result = PgType::parse("BLOB");
        assert_eq!(
            result.unwrap_err(),
            TypeMappingError::UnknownSqlType("BLOB".to_string())
        );
    }

    #[test]
    fn test_size_hints() {
        assert_eq!(PgType::Uuid.size_hint(), Some(16));
        assert_eq!(PgType::SmallInt.size_hint(), Some(2));
        assert_eq!(PgType::Varchar.size_hint(), None);
        assert_eq!(PgType::Jsonb.size_hint(), None);
    }
}
