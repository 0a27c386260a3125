//! Field Mapper - Core column mapping and SQL fragment construction
//!
//! This crate provides the per-entity column configuration (`MapperOptions`)
//! and the opaque, internally-constructed SQL text fragments (`WhereClause`,
//! `OrderByClause`) that keep caller-supplied field names out of raw SQL.

pub mod column;
pub mod errors;
pub mod fragment;
pub mod identifier;
pub mod operator;
pub mod options;
pub mod prelude;


pub use column::ColumnMap;
pub use errors::MapperError;
pub use fragment::{OrderByClause, WhereClause};
pub use identifier::{ColumnName, IdentifierError, TableName};
pub use operator::{RelationalOperator, SortDirection};
pub use options::{AutoMap, MapperOptions};
