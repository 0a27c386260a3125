//! Column metadata and fragment emission
//!
//! `ColumnMap` is the immutable association between a logical property and
//! its physical column. It is also the only place `WhereClause` and
//! `OrderByClause` values are born: emission always starts from a validated
//! column name and a whitelisted operator, never from caller text.

use crate::errors::MapperError;
use crate::fragment::{OrderByClause, WhereClause};
use crate::identifier::ColumnName;
use crate::operator::{RelationalOperator, SortDirection};
use pg_mapping::{pg_type_for_rust, PgMapped, PgType};

/// Immutable mapping from a logical property to a physical column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    column_name: ColumnName,
    rust_type: &'static str,
    pg_type: PgType,
}

impl ColumnMap {
    /// Create a mapping, inferring the database type from `T`
    pub fn create<T: PgMapped>(column_name: &str) -> Result<Self, MapperError> {
        Ok(Self {
            column_name: ColumnName::new(column_name)?,
            rust_type: std::any::type_name::<T>(),
            pg_type: T::PG_TYPE,
        })
    }

    /// Create a mapping with an explicit database type
    ///
    /// Bypasses inference; used when the natural inference is ambiguous,
    /// e.g. enums stored as small integers.
    pub fn create_as<T>(column_name: &str, pg_type: PgType) -> Result<Self, MapperError> {
        Ok(Self {
            column_name: ColumnName::new(column_name)?,
            rust_type: std::any::type_name::<T>(),
            pg_type,
        })
    }

    /// Create a mapping from a Rust type name
    ///
    /// String-keyed inference path; unsupported type names fail here, at
    /// configuration time.
    pub fn with_rust_type(
        column_name: &str,
        rust_type: &'static str,
    ) -> Result<Self, MapperError> {
        let pg_type = pg_type_for_rust(rust_type)?;
        Ok(Self {
            column_name: ColumnName::new(column_name)?,
            rust_type,
            pg_type,
        })
    }

    pub fn column_name(&self) -> &str {
        self.column_name.as_str()
    }

    pub fn rust_type(&self) -> &'static str {
        self.rust_type
    }

    pub fn pg_type(&self) -> PgType {
        self.pg_type
    }

    /// Emit a predicate fragment for this column
    ///
    /// Renders `"{column} {token}"`; the comparison value is bound as a
    /// separate parameter by the command builder and never appears here.
    pub fn predicate(&self, operator: RelationalOperator) -> WhereClause {
        WhereClause(format!("{} {}", self.column_name, operator.to_sql()))
    }

    /// Emit a predicate fragment with a positional placeholder
    ///
    /// Renders `"{column} {token} ${index}"` for operand-taking operators;
    /// null tests render without a placeholder.
    pub fn predicate_param(&self, operator: RelationalOperator, index: u32) -> WhereClause {
        if operator.takes_operand() {
            WhereClause(format!(
                "{} {} ${}",
                self.column_name,
                operator.to_sql(),
                index
            ))
        } else {
            self.predicate(operator)
        }
    }

    /// Emit an ORDER BY fragment for this column
    pub fn order_by(&self, direction: SortDirection) -> OrderByClause {
        OrderByClause(format!("{} {}", self.column_name, direction.to_sql()))
    }
}
