use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("no PostgreSQL type mapping for Rust type '{0}'")]
    UnsupportedType(String),

    #[error("unknown PostgreSQL type token '{0}'")]
    UnknownSqlType(String),
}
