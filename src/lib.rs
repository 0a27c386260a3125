//! # Relmap
//!
//! A type-safe SQL predicate and column-mapping construction layer for
//! PostgreSQL. Application code describes "filter by these fields" and
//! "sort by these fields"; relmap turns already-resolved columns and
//! whitelisted operators into WHERE/ORDER BY text fragments that cannot
//! carry injected SQL, and maps entity fields to column names and types
//! once, at bootstrap.
//!
//! ## Quick Start
//!
//! ```rust
//! use relmap::prelude::*;
//!
//! #[derive(AutoMap)]
//! pub struct User {
//!     pub id: Uuid,
//!     pub email: String,
//!     #[column(name = "signup_date")]
//!     pub created_at: DateTime<Utc>,
//! }
//!
//! fn main() -> Result<(), MapperError> {
//!     let mut users = MapperOptions::<User>::new();
//!     users.map_table(None, "users")?.auto_map_columns()?;
//!
//!     // Query-time code resolves caller-supplied field names against the
//!     // frozen dictionary, then asks the resolved columns for fragments.
//!     let fields = users.field_dictionary();
//!     let clause = fields["email"].predicate_param(RelationalOperator::ILike, 1)
//!         & fields["id"].predicate_param(RelationalOperator::Eq, 2);
//!     assert_eq!(clause.as_sql(), "email ILIKE $1 AND id = $2");
//!
//!     let ordering = fields["created_at"].order_by(SortDirection::Desc);
//!     assert_eq!(ordering.as_sql(), "signup_date DESC");
//!     Ok(())
//! }
//! ```

pub mod prelude;

pub use field_mapper::{
    AutoMap, ColumnMap, ColumnName, IdentifierError, MapperError, MapperOptions, OrderByClause,
    RelationalOperator, SortDirection, TableName, WhereClause,
};
pub use pg_mapping::{PgMapped, PgType, TypeMappingError};
