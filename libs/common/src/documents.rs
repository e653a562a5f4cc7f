//! Document store abstraction
//!
//! A document is a JSON object stored in a named collection under a string
//! `id`. Backends assign the id on first save and support one query beyond
//! primary-key access: a case-insensitive prefix match on a string field.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Name of the field holding the document key
pub const ID_FIELD: &str = "id";

/// Collection-level CRUD over JSON documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist a document, assigning an id when it has none.
    ///
    /// A document that already carries a non-empty string `id` replaces the
    /// stored document with that id. Returns the document as stored.
    async fn save(&self, collection: &str, document: Value) -> StoreResult<Value>;

    /// All documents of a collection in insertion order
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// Look up a single document by id
    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// Documents whose `field` matches `^<prefix>`, ignoring case
    async fn find_by_prefix(
        &self,
        collection: &str,
        field: &str,
        prefix: &str,
    ) -> StoreResult<Vec<Value>>;

    /// Delete the documents with the given ids, returning how many were removed
    async fn delete_all(&self, collection: &str, ids: &[String]) -> StoreResult<u64>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> StoreResult<bool>;
}

/// Shared handle to a document store backend
pub type DocumentStoreRef = Arc<dyn DocumentStore>;

/// Generate a fresh document id
pub fn new_document_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Ensure `document` is an object with an id, assigning one if missing.
///
/// Returns the id the document will be stored under.
pub(crate) fn assign_id(collection: &str, document: &mut Value) -> StoreResult<String> {
    let object = document
        .as_object_mut()
        .ok_or_else(|| StoreError::Corrupt {
            collection: collection.to_string(),
            reason: "document is not a JSON object".to_string(),
        })?;

    match object.get(ID_FIELD).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => {
            let id = new_document_id();
            object.insert(ID_FIELD.to_string(), Value::String(id.clone()));
            Ok(id)
        }
    }
}

/// Build the anchored expression used by prefix lookups.
///
/// The prefix is not escaped, so callers may pass regex syntax through.
pub fn prefix_pattern(prefix: &str) -> String {
    format!("^{}", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assign_id_generates_when_missing() {
        let mut doc = json!({"name": "pen"});
        let id = assign_id("items", &mut doc).unwrap();

        assert_eq!(id.len(), 32);
        assert_eq!(doc["id"], json!(id));
    }

    #[test]
    fn test_assign_id_keeps_existing() {
        let mut doc = json!({"id": "abc", "name": "pen"});
        assert_eq!(assign_id("items", &mut doc).unwrap(), "abc");
    }

    #[test]
    fn test_assign_id_replaces_empty_or_null() {
        let mut empty = json!({"id": ""});
        let mut null = json!({"id": null});

        assert!(!assign_id("items", &mut empty).unwrap().is_empty());
        assert!(!assign_id("items", &mut null).unwrap().is_empty());
    }

    #[test]
    fn test_assign_id_rejects_non_objects() {
        let mut doc = json!(["not", "an", "object"]);
        let err = assign_id("items", &mut doc).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_prefix_pattern_is_anchored() {
        assert_eq!(prefix_pattern("ali"), "^ali");
        assert_eq!(prefix_pattern(""), "^");
    }
}
