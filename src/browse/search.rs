//! Interactive construction of a search condition
//!
//! The user enters a field, picks an operator and types a value. A short
//! preview of matching documents is shown before the condition is applied,
//! modified (start over from scratch) or discarded.

use super::models::{FilterAttempt, SearchAction};
use super::session::{BrowseSession, Result};
use crate::db::Query;
use crate::filters::{FilterPredicate, Operator, coerce_value};
use crate::ui::{DisplayFormat, non_empty, render_documents};
use tracing::debug;

const PREVIEW_BANNER: &str = "/////////////Preview/////////////////";

impl BrowseSession<'_> {
    /// Build a search condition for `collection`
    ///
    /// Returns `None` when the preview is empty or the user backs out.
    /// "Modify" restarts the prompts without keeping anything from the
    /// discarded attempt.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError` if a prompt or the preview query fails.
    pub fn build_filter(
        &self,
        collection: &str,
        format: DisplayFormat,
    ) -> Result<Option<FilterPredicate>> {
        loop {
            match self.filter_attempt(collection, format)? {
                FilterAttempt::Apply(filter) => return Ok(Some(filter)),
                FilterAttempt::Abort => return Ok(None),
                FilterAttempt::Retry => debug!("modifying search condition"),
            }
        }
    }

    fn filter_attempt(&self, collection: &str, format: DisplayFormat) -> Result<FilterAttempt> {
        let field = self.input.prompt_text("Field", Some(non_empty))?;
        let operator = self.select("Operator", &Operator::ALL, Operator::symbol)?;
        let raw = self.input.prompt_text("Query", None)?;

        let value = coerce_value(&raw, operator, self.settings.chunk_size);
        let filter = FilterPredicate::new(field, operator, value);
        debug!(filter = %filter, "previewing search condition");

        let preview = self.store.query(
            collection,
            &Query::filtered(filter.clone(), self.settings.preview_limit),
        )?;

        if preview.is_empty() {
            self.notice("No documents found.");
            if !self.settings.empty_pause.is_zero() {
                std::thread::sleep(self.settings.empty_pause);
            }
            return Ok(FilterAttempt::Abort);
        }

        self.output.info(PREVIEW_BANNER);
        self.output.info("Search condition:");
        self.output.write(&format!("  Field: {}", filter.field));
        self.output.write(&format!("  Operator: {}", filter.operator));
        self.output.write(&format!("  Value: {raw}"));
        self.output.write(&render_documents(&preview, format));
        self.output.info(PREVIEW_BANNER);

        let attempt = match self.select("Select an action", &SearchAction::ALL, SearchAction::label)? {
            SearchAction::Apply => FilterAttempt::Apply(filter),
            SearchAction::Modify => FilterAttempt::Retry,
            SearchAction::Back => FilterAttempt::Abort,
        };
        Ok(attempt)
    }
}
