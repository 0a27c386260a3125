//! Opaque SQL text fragments
//!
//! `WhereClause` and `OrderByClause` wrap vetted SQL snippets. Their inner
//! constructor is crate-private: the only way to obtain a non-empty value is
//! through `ColumnMap` emission, which is what makes interpolating them into
//! a command safe. Calling code can only combine them with the algebraic
//! combinators below.

use std::fmt;
use std::ops::{Add, BitAnd, BitOr};

/// A vetted WHERE-clause fragment
///
/// Combine with `&` (AND) and `|` (OR). AND concatenates without
/// parentheses; OR is always parenthesized so it never changes precedence
/// when embedded in a larger AND-chain. Combining with the empty default
/// fragment yields the other operand unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WhereClause(pub(crate) String);

impl WhereClause {
    /// The fragment text, ready to interpolate after `WHERE`
    pub fn as_sql(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl BitAnd for WhereClause {
    type Output = WhereClause;

    fn bitand(self, rhs: WhereClause) -> WhereClause {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }
        WhereClause(format!("{} AND {}", self.0, rhs.0))
    }
}

impl BitOr for WhereClause {
    type Output = WhereClause;

    fn bitor(self, rhs: WhereClause) -> WhereClause {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }
        WhereClause(format!("({} OR {})", self.0, rhs.0))
    }
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vetted ORDER BY fragment
///
/// Combine with `+`; operands are comma-joined left to right, so the first
/// operand stays the primary sort key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderByClause(pub(crate) String);

impl OrderByClause {
    /// The fragment text, ready to interpolate after `ORDER BY`
    pub fn as_sql(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Add for OrderByClause {
    type Output = OrderByClause;

    fn add(self, rhs: OrderByClause) -> OrderByClause {
        if self.is_empty() {
            return rhs;
        }
        if rhs.is_empty() {
            return self;
        }
        OrderByClause(format!("{}, {}", self.0, rhs.0))
    }
}

impl fmt::Display for OrderByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
