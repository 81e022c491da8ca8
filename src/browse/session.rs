//! Browse session management
//!
//! `BrowseSession` ties a document store, a prompt backend and an output
//! writer together. Its behavior is split over three files, one per level
//! of the interactive flow:
//!
//! ```text
//! run()                      navigator.rs   collection list + Exit
//!   └─ browse_collection()   pager.rs       display format, page loop
//!        └─ build_filter()   search.rs      field/operator/value, preview
//! ```
//!
//! Every prompt or store failure is returned as `BrowseError` and ends the
//! session; nothing is retried.

use crate::config::BrowseOptions;
use crate::db::{Document, DocumentStore, StoreError};
use crate::filters::DEFAULT_CHUNK_SIZE;
use crate::ui::{InputError, OutputWriter, UserInput, render_document};
use std::time::Duration;

/// Browse session error type
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Errors that end a browse session
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    #[error(transparent)]
    Database(#[from] StoreError),

    #[error("Prompt failed: {0}")]
    Input(#[from] InputError),
}

/// Number of documents shown in a filter preview
pub const PREVIEW_LIMIT: usize = 10;

/// Tunables of a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Flags of the `browse` command
    pub options: BrowseOptions,
    /// Documents fetched for a filter preview
    pub preview_limit: usize,
    /// Membership values per group
    pub chunk_size: usize,
    /// Pause after an empty filter preview
    pub empty_pause: Duration,
}

impl SessionSettings {
    #[must_use]
    pub const fn new(options: BrowseOptions) -> Self {
        Self {
            options,
            preview_limit: PREVIEW_LIMIT,
            chunk_size: DEFAULT_CHUNK_SIZE,
            empty_pause: Duration::from_secs(2),
        }
    }

    #[must_use]
    pub const fn with_empty_pause(mut self, pause: Duration) -> Self {
        self.empty_pause = pause;
        self
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(BrowseOptions::default())
    }
}

/// Interactive browse session over one document store
pub struct BrowseSession<'a> {
    pub(super) store: &'a dyn DocumentStore,
    pub(super) input: &'a dyn UserInput,
    pub(super) output: &'a dyn OutputWriter,
    pub(super) settings: SessionSettings,
}

impl<'a> BrowseSession<'a> {
    /// Create a new browse session
    #[must_use]
    pub fn new(
        store: &'a dyn DocumentStore,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        settings: SessionSettings,
    ) -> Self {
        Self {
            store,
            input,
            output,
            settings,
        }
    }

    /// Show one document using the `--table` flag
    ///
    /// Pages always use the display format chosen for the session; this is
    /// only for callers that already hold a single document.
    pub fn show_document(&self, document: &Document) {
        self.output
            .write(&render_document(document, self.settings.options.table));
    }

    /// Ask the user to pick one of `options`, shown by `label`
    pub(super) fn select<T: Copy>(
        &self,
        prompt: &str,
        options: &[T],
        label: fn(&T) -> &'static str,
    ) -> Result<T> {
        let items: Vec<String> = options.iter().map(|o| label(o).to_string()).collect();
        let index = self.input.prompt_select(prompt, &items)?;
        options
            .get(index)
            .copied()
            .ok_or_else(|| InputError::Invalid(format!("no option at index {index}")).into())
    }

    /// Print a framed notice
    pub(super) fn notice(&self, message: &str) {
        let rule = "─".repeat(29);
        self.output.warning(&rule);
        self.output.warning(&format!(" {message}"));
        self.output.warning(&rule);
    }
}
