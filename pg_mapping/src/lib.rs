//! Unified type mapping between Rust types and PostgreSQL
//! This crate provides the type-tag inference and identifier casing used
//! across the relmap ecosystem.

pub mod casing;
pub mod errors;
pub mod infer;
pub mod pg_type;

// Re-export commonly used items
pub use casing::to_snake_case;
pub use errors::TypeMappingError;
pub use infer::{pg_type_for_rust, PgMapped};
pub use pg_type::PgType;
