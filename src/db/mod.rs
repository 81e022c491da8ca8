//! Document store module for docbrowse
//!
//! Provides the `DocumentStore` abstraction the browser reads through, and
//! two backends:
//! - `SledStore`: sled embedded database, one tree per collection
//! - `MemoryStore`: in-memory maps, for tests and demos
//!
//! Documents are JSON objects keyed by their id, so every backend returns
//! them in id order.

use sled::Db;
use std::path::Path;
use tracing::debug;

pub mod error;
pub mod memory;
pub mod query;
pub mod types;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{MAX_MEMBERSHIP_VALUES, Query};
pub use types::{Document, Value};

/// Name of the tree sled creates for itself; never a collection
const DEFAULT_TREE: &[u8] = b"__sled__default";

/// Read access to a collection-oriented document database
pub trait DocumentStore {
    /// List all non-empty top-level collections, ordered by name
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn collections(&self) -> Result<Vec<String>, StoreError>;

    /// Read a window of documents from `collection`
    ///
    /// An unknown collection yields no documents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read, a document cannot
    /// be decoded, or the query's predicate is invalid.
    fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;
}

/// Document store backed by a sled database
///
/// Each collection is a sled tree; each entry maps a UTF-8 document id to
/// the document's JSON-encoded fields.
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use docbrowse::db::SledStore;
    /// let store = SledStore::open("my_store").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened sled store");
        Ok(Self { db })
    }

    /// Insert or replace a document
    ///
    /// The browser never writes; this exists for seeding and imports.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding or the database write fails.
    pub fn put(&self, collection: &str, document: &Document) -> Result<(), StoreError> {
        if collection.as_bytes() == DEFAULT_TREE {
            return Err(StoreError::InvalidName(collection.to_string()));
        }
        let tree = self.db.open_tree(collection)?;
        tree.insert(document.id.as_bytes(), document.to_vec()?)?;
        Ok(())
    }

    /// Flush pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    fn has_tree(&self, collection: &str) -> bool {
        collection.as_bytes() != DEFAULT_TREE
            && self
                .db
                .tree_names()
                .iter()
                .any(|name| name.as_ref() == collection.as_bytes())
    }
}

impl DocumentStore for SledStore {
    fn collections(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for name in self.db.tree_names() {
            if name.as_ref() == DEFAULT_TREE {
                continue;
            }
            if self.db.open_tree(&name)?.is_empty() {
                continue;
            }
            let name = String::from_utf8(name.to_vec())
                .map_err(|e| StoreError::InvalidName(format!("collection name: {e}")))?;
            names.push(name);
        }
        names.sort();
        Ok(names)
    }

    fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        debug!(
            collection,
            offset = query.offset,
            limit = query.limit,
            filtered = query.filter.is_some(),
            "querying collection"
        );

        // open_tree would create the collection as a side effect
        if !self.has_tree(collection) {
            return query::execute(std::iter::empty(), query);
        }

        let tree = self.db.open_tree(collection)?;
        let documents = tree.iter().map(|entry| {
            let (key, value) = entry?;
            let id = std::str::from_utf8(&key)
                .map_err(|e| StoreError::InvalidName(format!("document id: {e}")))?;
            Document::from_slice(id, &value)
        });
        query::execute(documents, query)
    }
}
