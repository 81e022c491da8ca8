//! Filter construction module
//!
//! This module turns raw user input into typed, single-field filter
//! predicates that a document store can evaluate.
//!
//! # Examples
//!
//! ```
//! use docbrowse::filters::{coerce_value, FilterPredicate, Operator, TypedValue, DEFAULT_CHUNK_SIZE};
//!
//! let value = coerce_value("30", Operator::Ge, DEFAULT_CHUNK_SIZE);
//! assert_eq!(value, TypedValue::Float(30.0));
//!
//! let predicate = FilterPredicate::new("age", Operator::Ge, value);
//! assert_eq!(predicate.to_string(), "age >= 30");
//! ```

pub mod operations;
pub mod types;

pub use operations::{DEFAULT_CHUNK_SIZE, chunk, coerce_value};
pub use types::{FilterPredicate, Operator, TypedValue};
