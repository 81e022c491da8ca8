//! In-memory document store
//!
//! Holds collections in ordered maps and applies the same query rules as
//! the sled backend. Useful for tests and demos.

use super::error::StoreError;
use super::query::{self, Query};
use super::types::Document;
use super::DocumentStore;
use std::collections::BTreeMap;

/// Document store kept entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, BTreeMap<String, Document>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document in `collection`
    pub fn insert(&mut self, collection: &str, document: Document) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(document.id.clone(), document);
    }

    /// Builder-style variant of [`MemoryStore::insert`] for a batch of documents
    #[must_use]
    pub fn with_documents(mut self, collection: &str, documents: Vec<Document>) -> Self {
        for document in documents {
            self.insert(collection, document);
        }
        self
    }
}

impl DocumentStore for MemoryStore {
    fn collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .collections
            .iter()
            .filter(|(_, documents)| !documents.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError> {
        let Some(documents) = self.collections.get(collection) else {
            return query::execute(std::iter::empty(), query);
        };
        query::execute(documents.values().cloned().map(Ok), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, n: i64) -> Document {
        Document::from_json(id, json!({ "n": n })).unwrap()
    }

    #[test]
    fn test_collections_sorted_and_non_empty() {
        let mut store = MemoryStore::new()
            .with_documents("users", vec![doc("u1", 1)])
            .with_documents("orders", vec![doc("o1", 1)]);
        store.collections.insert("empty".into(), BTreeMap::new());

        assert_eq!(store.collections().unwrap(), vec!["orders", "users"]);
    }

    #[test]
    fn test_query_orders_by_id() {
        let store = MemoryStore::new().with_documents("c", vec![doc("b", 2), doc("a", 1), doc("c", 3)]);
        let docs = store.query("c", &Query::scan(10)).unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = MemoryStore::new();
        store.insert("c", doc("a", 1));
        store.insert("c", doc("a", 2));
        let docs = store.query("c", &Query::scan(10)).unwrap();
        assert_eq!(docs, vec![doc("a", 2)]);
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.query("missing", &Query::scan(10)).unwrap().is_empty());
    }
}
