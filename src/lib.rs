//! Docbrowse - an interactive terminal browser for document databases
//!
//! This library lists the collections of an embedded document store, pages
//! through their documents and builds single-field search conditions from
//! text the user types, with a preview before a condition is applied.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod filters;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DocbrowseError {
    /// Database error
    #[error(transparent)]
    Store(#[from] db::StoreError),
    /// The interactive session ended with an error
    #[error("{0}")]
    Browse(#[from] browse::BrowseError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
