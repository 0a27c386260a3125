//! Validated SQL identifiers
//!
//! Column and table names are wrapped in newtypes whose construction
//! validates them against PostgreSQL identifier rules, so that a name
//! reaching fragment emission is always safe to interpolate.

use std::fmt;
use thiserror::Error;

/// Validation errors for database identifiers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier cannot be empty")]
    Empty,

    #[error("identifier '{name}' is too long: {length} bytes (max {max})")]
    TooLong {
        name: String,
        length: usize,
        max: usize,
    },

    #[error("identifier '{0}' must start with a letter or underscore")]
    InvalidStart(String),

    #[error("identifier '{0}' contains characters outside [A-Za-z0-9_]")]
    InvalidCharacters(String),

    #[error("identifier '{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),
}

/// PostgreSQL identifier length limit
const MAX_LENGTH: usize = 63;

/// SQL keywords that may not be used as bare identifiers
const RESERVED_KEYWORDS: &[&str] = &[
    "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS", "AND", "OR",
    "NOT", "NULL", "TRUE", "FALSE", "CASE", "WHEN", "THEN", "ELSE", "END", "EXISTS", "IN",
    "LIKE", "ILIKE", "BETWEEN", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "UNION",
    "ALL", "DISTINCT", "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "PRIMARY", "KEY",
    "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT", "COLUMN", "USING", "RETURNING",
];

fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    if name.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if name.len() > MAX_LENGTH {
        return Err(IdentifierError::TooLong {
            name: name.to_string(),
            length: name.len(),
            max: MAX_LENGTH,
        });
    }

    let first_char = name.chars().next().ok_or(IdentifierError::Empty)?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(IdentifierError::InvalidStart(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(IdentifierError::InvalidCharacters(name.to_string()));
    }

    if RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str()) {
        return Err(IdentifierError::ReservedKeyword(name.to_string()));
    }

    Ok(())
}

/// A validated column name that is safe to use in SQL fragments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated table name that is safe to use in SQL statements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        let valid = [
            "id",
            "customer_name",
            "UserProfiles",
            "_private",
            "col123",
            "a",
            &"a".repeat(63),
        ];

        for name in valid {
            assert!(
                ColumnName::new(name).is_ok(),
                "should accept valid name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        let cases = [
            ("", IdentifierError::Empty),
            ("123col", IdentifierError::InvalidStart("123col".to_string())),
            (
                "user-name",
                IdentifierError::InvalidCharacters("user-name".to_string()),
            ),
            (
                "name; DROP TABLE users",
                IdentifierError::InvalidCharacters("name; DROP TABLE users".to_string()),
            ),
            (
                "\"quoted\"",
                IdentifierError::InvalidCharacters("\"quoted\"".to_string()),
            ),
            (
                "select",
                IdentifierError::ReservedKeyword("select".to_string()),
            ),
            (
                "WHERE",
                IdentifierError::ReservedKeyword("WHERE".to_string()),
            ),
        ];

        for (name, expected) in cases {
            let result = ColumnName::new(name);
            assert_eq!(result.unwrap_err(), expected, "name: {}", name);
        }
    }

    #[test]
    fn test_too_long_identifier() {
        let long = "a".repeat(64);
        match TableName::new(&long).unwrap_err() {
            IdentifierError::TooLong { length, max, .. } => {
                assert_eq!(length, 64);
                assert_eq!(max, 63);
            }
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let column = ColumnName::new("status").unwrap();
        let table = TableName::new("orders").unwrap();
        assert_eq!(column.to_string(), "status");
        assert_eq!(table.to_string(), "orders");
    }
}
