//! Convenience re-exports for common field-mapper usage

pub use crate::column::ColumnMap;
pub use crate::errors::MapperError;
pub use crate::fragment::{OrderByClause, WhereClause};
pub use crate::identifier::{ColumnName, IdentifierError, TableName};
pub use crate::operator::{RelationalOperator, SortDirection};
pub use crate::options::{AutoMap, MapperOptions};
