//! In-process document store
//!
//! Keeps every collection in a `Vec` behind a `RwLock`. Locks are only held
//! for the duration of a single operation and never across an await point.

use async_trait::async_trait;
use regex::RegexBuilder;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

use super::{DocumentStore, ID_FIELD, assign_id, prefix_pattern};
use crate::error::{StoreError, StoreResult};

/// In-memory implementation of DocumentStore
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Value>>>>,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn document_id(document: &Value) -> Option<&str> {
    document.get(ID_FIELD).and_then(Value::as_str)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn save(&self, collection: &str, mut document: Value) -> StoreResult<Value> {
        let id = assign_id(collection, &mut document)?;

        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let documents = collections.entry(collection.to_string()).or_default();

        match documents
            .iter_mut()
            .find(|existing| document_id(existing) == Some(id.as_str()))
        {
            Some(existing) => *existing = document.clone(),
            None => documents.push(document.clone()),
        }

        debug!("Saved document {} in {}", id, collection);
        Ok(document)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| document_id(document) == Some(id))
                .cloned()
        }))
    }

    async fn find_by_prefix(
        &self,
        collection: &str,
        field: &str,
        prefix: &str,
    ) -> StoreResult<Vec<Value>> {
        let regex = RegexBuilder::new(&prefix_pattern(prefix))
            .case_insensitive(true)
            .build()?;

        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        let matches = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| {
                        document
                            .get(field)
                            .and_then(Value::as_str)
                            .is_some_and(|value| regex.is_match(value))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(matches)
    }

    async fn delete_all(&self, collection: &str, ids: &[String]) -> StoreResult<u64> {
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = documents.len();
        documents.retain(|document| {
            !document_id(document).is_some_and(|id| ids.iter().any(|target| target == id))
        });
        let removed = (before - documents.len()) as u64;

        debug!("Deleted {} documents from {}", removed, collection);
        Ok(removed)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        Ok(!self.collections.is_poisoned())
    }
}
