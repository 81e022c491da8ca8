//! Document store error types
//!
//! This module defines all error types that can occur during store operations.
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`JsonError`**: Failures when (de)serializing stored documents
//! - **`InvalidQuery`**: A predicate the store refuses to evaluate
//! - **`InvalidName`**: A collection name or document id that is not valid UTF-8
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// Represents a JSON encoding or decoding error
    #[error("Error while decoding document: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The query cannot be evaluated (e.g. too many membership values)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A stored key is not a valid name
    #[error("Invalid name: {0}")]
    InvalidName(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
