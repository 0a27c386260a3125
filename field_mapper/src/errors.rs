use crate::identifier::IdentifierError;
use pg_mapping::TypeMappingError;
use thiserror::Error;

/// Configuration-time errors raised by the mapping layer
///
/// Every variant indicates a programmer mistake in the mapping setup and is
/// surfaced synchronously at the mutating call, before any query is served.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapperError {
    #[error("duplicate column mapping for property '{0}'")]
    DuplicateProperty(String),

    #[error("type mapping error: {0}")]
    UnsupportedType(#[from] TypeMappingError),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("mapper options are frozen; cannot register '{0}' after the field dictionary has been read")]
    Frozen(String),
}
