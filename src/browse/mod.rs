//! Browse module - interactive collection, page and search workflows
//!
//! # Architecture
//!
//! - `models`: browse state and menu actions
//! - `session`: the session type, its settings and error
//! - `navigator`: collection selection
//! - `pager`: pagination over one collection
//! - `search`: building and previewing a search condition
//!
//! The session only talks to the [`DocumentStore`](crate::db::DocumentStore),
//! [`UserInput`](crate::ui::UserInput) and [`OutputWriter`](crate::ui::OutputWriter)
//! traits, so the whole flow can be driven by scripted input in tests.

pub mod models;
pub mod navigator;
pub mod pager;
pub mod search;
pub mod session;

pub use models::{BrowseState, FilterAttempt, PageAction, PageFlow, SearchAction};
pub use navigator::EXIT_LABEL;
pub use session::{BrowseError, BrowseSession, PREVIEW_LIMIT, SessionSettings};
