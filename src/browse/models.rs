//! Browse state and menu actions
//!
//! `BrowseState` is the per-collection state the pagination loop drives;
//! its transition methods keep the page/filter invariants in one place.
//! The action enums define the menus and the labels shown for them.

use crate::db::Query;
use crate::filters::FilterPredicate;
use crate::ui::DisplayFormat;

/// Action offered below each page of documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    NextPage,
    PreviousPage,
    NewSearch,
    ClearSearch,
    BackToCollections,
}

impl PageAction {
    /// Actions in menu order
    pub const ALL: [Self; 5] = [
        Self::NextPage,
        Self::PreviousPage,
        Self::NewSearch,
        Self::ClearSearch,
        Self::BackToCollections,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NextPage => "Next Page",
            Self::PreviousPage => "Previous Page",
            Self::NewSearch => "New Search Condition",
            Self::ClearSearch => "Clear Search Condition",
            Self::BackToCollections => "Back to Collections",
        }
    }
}

/// Action offered below a filter preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Apply,
    Modify,
    Back,
}

impl SearchAction {
    /// Actions in menu order
    pub const ALL: [Self; 3] = [Self::Apply, Self::Modify, Self::Back];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Apply => "Apply Search Condition",
            Self::Modify => "Modify Search Condition",
            Self::Back => "Back to Documents",
        }
    }
}

/// Whether the pagination loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFlow {
    /// Fetch and show the (possibly new) current page
    Stay,
    /// Return to collection selection
    Leave,
}

/// Outcome of one pass through the filter prompts
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAttempt {
    /// The user accepted this predicate
    Apply(FilterPredicate),
    /// The user wants to start over
    Retry,
    /// No predicate: nothing matched or the user backed out
    Abort,
}

/// State of browsing one collection
///
/// Invariant: `page` is 0 right after the filter is set or cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    pub collection: String,
    pub active_filter: Option<FilterPredicate>,
    pub page: usize,
    pub display_format: DisplayFormat,
}

impl BrowseState {
    #[must_use]
    pub fn new(collection: impl Into<String>, display_format: DisplayFormat) -> Self {
        Self {
            collection: collection.into(),
            active_filter: None,
            page: 0,
            display_format,
        }
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Go back one page; stays on the first page
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Replace the active filter and restart from the first page
    pub fn set_filter(&mut self, filter: FilterPredicate) {
        self.active_filter = Some(filter);
        self.page = 0;
    }

    /// Drop the active filter and restart from the first page
    pub fn clear_filter(&mut self) {
        self.active_filter = None;
        self.page = 0;
    }

    /// Query for the current page
    #[must_use]
    pub fn query(&self, page_size: usize) -> Query {
        let query = match &self.active_filter {
            Some(filter) => Query::filtered(filter.clone(), page_size),
            None => Query::scan(page_size),
        };
        query.with_offset(self.page * page_size)
    }
}
