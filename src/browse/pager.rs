//! Paging through one collection

use super::models::{BrowseState, PageAction, PageFlow};
use super::session::{BrowseSession, Result};
use crate::ui::{DisplayFormat, render_documents};
use tracing::{debug, info};

impl BrowseSession<'_> {
    /// Page through `collection` until the user goes back or pages run out
    ///
    /// The display format is asked once and kept for the whole visit.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError` if a query or prompt fails.
    pub fn browse_collection(&self, collection: &str) -> Result<()> {
        let format = self.select("Select display format", &DisplayFormat::ALL, DisplayFormat::label)?;
        let mut state = BrowseState::new(collection, format);
        info!(collection, format = %format, "browsing collection");

        loop {
            let query = state.query(self.settings.options.page_size);
            let documents = self.store.query(&state.collection, &query)?;

            if documents.is_empty() {
                self.notice("No more documents available.");
                return Ok(());
            }

            self.output.info(&format!(
                "Page {} of collection '{}':\n",
                state.page + 1,
                state.collection
            ));
            self.output
                .write(&render_documents(&documents, state.display_format));

            let action = self.select("Select an action", &PageAction::ALL, PageAction::label)?;
            if self.apply_page_action(&mut state, action)? == PageFlow::Leave {
                return Ok(());
            }
        }
    }

    /// Apply one menu action to the browse state
    ///
    /// # Errors
    ///
    /// Returns `BrowseError` if building a new filter fails.
    pub fn apply_page_action(&self, state: &mut BrowseState, action: PageAction) -> Result<PageFlow> {
        match action {
            PageAction::NextPage => state.next_page(),
            PageAction::PreviousPage => state.previous_page(),
            PageAction::NewSearch => {
                match self.build_filter(&state.collection, state.display_format)? {
                    Some(filter) => {
                        info!(filter = %filter, "applying search condition");
                        state.set_filter(filter);
                    }
                    None => debug!("search condition discarded"),
                }
            }
            PageAction::ClearSearch => {
                debug!("clearing search condition");
                state.clear_filter();
            }
            PageAction::BackToCollections => return Ok(PageFlow::Leave),
        }
        Ok(PageFlow::Stay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::session::SessionSettings;
    use crate::config::BrowseOptions;
    use crate::db::{Document, MemoryStore};
    use crate::filters::{FilterPredicate, Operator, TypedValue};
    use crate::ui::BufferWriter;
    use crate::ui::mock::{ScriptedInput, choose, type_text};
    use serde_json::json;
    use std::time::Duration;

    fn numbers(count: i64) -> MemoryStore {
        let documents = (0..count)
            .map(|i| Document::from_json(format!("n{i:02}"), json!({ "n": i })).unwrap())
            .collect();
        MemoryStore::new().with_documents("numbers", documents)
    }

    fn settings(page_size: usize) -> SessionSettings {
        SessionSettings::new(BrowseOptions::new(false, page_size).unwrap())
            .with_empty_pause(Duration::ZERO)
    }

    fn existing_filter() -> FilterPredicate {
        FilterPredicate::new("n", Operator::Lt, TypedValue::Float(3.0))
    }

    #[test]
    fn test_pages_forward_and_back() {
        let store = numbers(5);
        let input = ScriptedInput::new(vec![
            choose("Column Format"),
            choose("Next Page"),
            choose("Next Page"),
            choose("Previous Page"),
            choose("Back to Collections"),
        ]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(2));

        session.browse_collection("numbers").unwrap();

        let pages: Vec<String> = output
            .messages()
            .into_iter()
            .map(|(_, m)| m)
            .filter(|m| m.starts_with("Page "))
            .collect();
        assert_eq!(pages.len(), 4);
        assert!(pages[0].starts_with("Page 1 "));
        assert!(pages[1].starts_with("Page 2 "));
        assert!(pages[2].starts_with("Page 3 "));
        assert!(pages[3].starts_with("Page 2 "));
        assert!(output.contains("Document ID: n04"));
    }

    #[test]
    fn test_past_the_end_returns() {
        let store = numbers(2);
        let input = ScriptedInput::new(vec![choose("Table Format"), choose("Next Page")]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(2));

        session.browse_collection("numbers").unwrap();

        assert!(output.contains("No more documents available."));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_empty_collection_returns_immediately() {
        let store = MemoryStore::new();
        let input = ScriptedInput::new(vec![choose("Table Format")]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));

        session.browse_collection("users").unwrap();

        assert!(output.contains("No more documents available."));
        assert!(!output.contains("Page 1"));
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let store = numbers(1);
        let input = ScriptedInput::new(vec![]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));
        let mut state = BrowseState::new("numbers", DisplayFormat::Table);

        let flow = session
            .apply_page_action(&mut state, PageAction::PreviousPage)
            .unwrap();
        assert_eq!(flow, PageFlow::Stay);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_new_search_sets_filter_and_resets_page() {
        let store = numbers(30);
        let input = ScriptedInput::new(vec![
            type_text("n"),
            choose(">="),
            type_text("25"),
            choose("Apply Search Condition"),
        ]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));
        let mut state = BrowseState::new("numbers", DisplayFormat::Table);
        state.next_page();

        session
            .apply_page_action(&mut state, PageAction::NewSearch)
            .unwrap();

        assert_eq!(state.page, 0);
        assert_eq!(
            state.active_filter,
            Some(FilterPredicate::new("n", Operator::Ge, TypedValue::Float(25.0)))
        );
    }

    #[test]
    fn test_aborted_search_keeps_state() {
        let store = numbers(30);
        let input = ScriptedInput::new(vec![
            type_text("n"),
            choose(">"),
            type_text("5"),
            choose("Back to Documents"),
        ]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));
        let mut state = BrowseState::new("numbers", DisplayFormat::Table);
        state.set_filter(existing_filter());
        state.next_page();

        session
            .apply_page_action(&mut state, PageAction::NewSearch)
            .unwrap();

        assert_eq!(state.page, 1);
        assert_eq!(state.active_filter, Some(existing_filter()));
    }

    #[test]
    fn test_clear_search_resets() {
        let store = numbers(1);
        let input = ScriptedInput::new(vec![]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));
        let mut state = BrowseState::new("numbers", DisplayFormat::Table);
        state.set_filter(existing_filter());
        state.next_page();

        session
            .apply_page_action(&mut state, PageAction::ClearSearch)
            .unwrap();

        assert_eq!(state.page, 0);
        assert!(state.active_filter.is_none());
    }

    #[test]
    fn test_filtered_paging_end_to_end() {
        let store = numbers(30);
        let input = ScriptedInput::new(vec![
            choose("Column Format"),
            choose("New Search Condition"),
            type_text("n"),
            choose(">="),
            type_text("25"),
            choose("Apply Search Condition"),
            choose("Next Page"),
        ]);
        let output = BufferWriter::new();
        let session = BrowseSession::new(&store, &input, &output, settings(10));

        session.browse_collection("numbers").unwrap();

        let text = output.text();
        let after_apply = text.rsplit("Page 1 of collection").next().unwrap();
        assert!(after_apply.contains("Document ID: n25"));
        assert!(after_apply.contains("Document ID: n29"));
        assert!(!after_apply.contains("Document ID: n24"));
        assert!(output.contains("No more documents available."));
    }
}
