//! Convenience re-exports for common relmap usage
//!
//! # Example
//!
//! ```rust
//! use relmap::prelude::*;
//!
//! // Now you have access to the mapper, fragment, and derive types
//! ```

// Core mapping types
pub use field_mapper::prelude::*;

// Re-export member crates for macro-generated code
pub use field_mapper;
pub use pg_mapping;

// Type tags and inference
pub use pg_mapping::{PgMapped, PgType, TypeMappingError};

// Derive macro for auto-mapping entity structs
pub use mapper_derive::AutoMap;

// Common external dependencies
pub use chrono::{DateTime, Utc};
pub use serde_json;
pub use uuid::Uuid;
