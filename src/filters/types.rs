//! Filter data structures and types
//!
//! This module defines the core data structures for single-field filters:
//! - `Operator`: The comparison applied between a field and a value
//! - `TypedValue`: The coerced right-hand side of a comparison
//! - `FilterPredicate`: Complete field/operator/value condition

use std::fmt;

/// Comparison operator for a filter predicate
///
/// The order of `Operator::ALL` is the order in which operators are offered
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `array-contains`
    ArrayContains,
    /// `in`
    In,
    /// `array-contains-any`
    ArrayContainsAny,
}

impl Operator {
    /// All supported operators, in prompt order
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Lt,
        Self::Le,
        Self::Gt,
        Self::Ge,
        Self::ArrayContains,
        Self::In,
        Self::ArrayContainsAny,
    ];

    /// Symbol shown to the user and used in the preview banner
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::ArrayContains => "array-contains",
            Self::In => "in",
            Self::ArrayContainsAny => "array-contains-any",
        }
    }

    /// Whether this operator orders values (`<`, `<=`, `>`, `>=`)
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    /// Whether this operator takes a list of candidate values
    #[must_use]
    pub const fn is_membership(&self) -> bool {
        matches!(self, Self::In | Self::ArrayContainsAny)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Right-hand side of a filter predicate after coercion
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// Text compared as a string
    String(String),
    /// Floating point number
    Float(f64),
    /// Signed integer
    Integer(i64),
    /// Membership values split into bounded groups
    Chunks(Vec<Vec<String>>),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Chunks(chunks) => {
                let groups: Vec<String> = chunks
                    .iter()
                    .map(|group| format!("[{}]", group.join(", ")))
                    .collect();
                write!(f, "[{}]", groups.join(", "))
            }
        }
    }
}

/// A single field/operator/value condition applied to a collection query
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPredicate {
    /// Field name (dotted paths reach into nested maps)
    pub field: String,
    /// Comparison operator
    pub operator: Operator,
    /// Coerced comparison value
    pub value: TypedValue,
}

impl FilterPredicate {
    /// Create a new predicate
    #[must_use]
    pub fn new(field: impl Into<String>, operator: Operator, value: TypedValue) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
