//! Whitelisted SQL comparison and ordering tokens
//!
//! This module provides the closed operator set stamped onto predicate
//! fragments. There is no construction path from caller-supplied strings.

use serde::{Deserialize, Serialize};

/// Closed set of comparison operators permitted in predicate construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationalOperator {
    Eq,        // =
    Ne,        // <>
    Gt,        // >
    Gte,       // >=
    Lt,        // <
    Lte,       // <=
    Like,      // LIKE
    ILike,     // ILIKE (case insensitive)
    IsNull,    // IS NULL
    IsNotNull, // IS NOT NULL
}

impl RelationalOperator {
    /// Every operator in the whitelist, in declaration order
    pub const ALL: [RelationalOperator; 10] = [
        RelationalOperator::Eq,
        RelationalOperator::Ne,
        RelationalOperator::Gt,
        RelationalOperator::Gte,
        RelationalOperator::Lt,
        RelationalOperator::Lte,
        RelationalOperator::Like,
        RelationalOperator::ILike,
        RelationalOperator::IsNull,
        RelationalOperator::IsNotNull,
    ];

    /// The exact SQL token this operator was defined with
    pub fn to_sql(&self) -> &'static str {
        match self {
            RelationalOperator::Eq => "=",
            RelationalOperator::Ne => "<>",
            RelationalOperator::Gt => ">",
            RelationalOperator::Gte => ">=",
            RelationalOperator::Lt => "<",
            RelationalOperator::Lte => "<=",
            RelationalOperator::Like => "LIKE",
            RelationalOperator::ILike => "ILIKE",
            RelationalOperator::IsNull => "IS NULL",
            RelationalOperator::IsNotNull => "IS NOT NULL",
        }
    }

    /// Whether a bound parameter follows this operator in a predicate
    ///
    /// False only for the null tests, which are complete on their own.
    pub fn takes_operand(&self) -> bool {
        !matches!(
            self,
            RelationalOperator::IsNull | RelationalOperator::IsNotNull
        )
    }
}

/// Sort direction for ORDER BY fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}
