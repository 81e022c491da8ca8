//! Document and field value types
//!
//! Documents are flat maps from field name to a dynamically-typed `Value`.
//! Values are a tagged enum so that comparison and display are deterministic
//! for every field, whatever its type.
//!
//! # Examples
//!
//! ```
//! use docbrowse::db::{Document, Value};
//! use serde_json::json;
//!
//! let doc = Document::from_json("alice", json!({"age": 30, "tags": ["a", "b"]})).unwrap();
//! assert_eq!(doc.get("age"), Some(&Value::Integer(30)));
//! assert_eq!(doc.get("tags").unwrap().to_string(), "[a, b]");
//! ```

use super::error::StoreError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Dynamically-typed field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

/// 2^63, the first float above `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float
///
/// No precision is lost for integers beyond 2^53. NaN is unordered.
fn compare_integer_float(integer: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_BOUND {
        return Some(Ordering::Greater);
    }
    // |trunc| < 2^63 here, so the cast is exact
    #[allow(clippy::cast_possible_truncation)]
    let whole = float.trunc() as i64;
    match integer.cmp(&whole) {
        Ordering::Equal => 0.0_f64.partial_cmp(&float.fract()),
        unequal => Some(unequal),
    }
}

impl Value {
    const fn is_number(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Compare two values of the same kind
    ///
    /// Numbers compare with numbers (integers and floats mix exactly),
    /// strings with strings and booleans with booleans. Anything else is
    /// unordered.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(a), Self::Float(b)) => compare_integer_float(*a, *b),
            (Self::Float(a), Self::Integer(b)) => {
                compare_integer_float(*b, *a).map(Ordering::reverse)
            }
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality with number coercion between integers and floats
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        if self.is_number() && other.is_number() {
            self.compare(other) == Some(Ordering::Equal)
        } else {
            self == other
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// A stored document: a stable id plus its fields
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: BTreeMap<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Build a document from a JSON object
    ///
    /// # Errors
    ///
    /// Returns `StoreError::JsonError` if `json` is not an object.
    pub fn from_json(id: impl Into<String>, json: serde_json::Value) -> Result<Self, StoreError> {
        let fields: BTreeMap<String, Value> = serde_json::from_value(json)?;
        Ok(Self::new(id, fields))
    }

    /// Decode a document from its stored JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `StoreError::JsonError` if the bytes are not a JSON object.
    pub fn from_slice(id: impl Into<String>, bytes: &[u8]) -> Result<Self, StoreError> {
        let fields: BTreeMap<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self::new(id, fields))
    }

    /// Encode the document fields as JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `StoreError::JsonError` if serialization fails.
    pub fn to_vec(&self) -> Result<Vec<u8>, StoreError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }

    /// Look up a field by name
    ///
    /// An exact key match wins; otherwise a dotted path walks nested maps.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        if let Some(value) = self.fields.get(field) {
            return Some(value);
        }

        let mut parts = field.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            match current {
                Value::Map(entries) => current = entries.get(part)?,
                _ => return None,
            }
        }
        Some(current)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
