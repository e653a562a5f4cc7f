//! Repositories for document store operations

use anyhow::{Context, Result};
use common::documents::DocumentStoreRef;
use std::marker::PhantomData;
use tracing::info;

use crate::models::{Document, Item, Person, User};

/// Typed access to one collection of the document store
pub struct Repository<T> {
    store: DocumentStoreRef,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

pub type ItemRepository = Repository<Item>;
pub type PeopleRepository = Repository<Person>;
pub type UserRepository = Repository<User>;

impl<T: Document> Repository<T> {
    /// Create a new repository over the given store
    pub fn new(store: DocumentStoreRef) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Persist an entity, returning it with its store-assigned id
    pub async fn save(&self, entity: &T) -> Result<T> {
        let document = serde_json::to_value(entity)?;
        let stored = self
            .store
            .save(T::COLLECTION, document)
            .await
            .with_context(|| format!("Failed to save document in {}", T::COLLECTION))?;

        Ok(serde_json::from_value(stored)?)
    }

    /// Get every entity in the collection
    pub async fn find_all(&self) -> Result<Vec<T>> {
        let documents = self
            .store
            .find_all(T::COLLECTION)
            .await
            .with_context(|| format!("Failed to list {}", T::COLLECTION))?;

        decode_all(documents)
    }

    /// Find an entity by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let document = self
            .store
            .find_by_id(T::COLLECTION, id)
            .await
            .with_context(|| format!("Failed to look up {} in {}", id, T::COLLECTION))?;

        document
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    /// Delete the given entities, returning how many were removed
    pub async fn delete_all(&self, entities: &[T]) -> Result<u64> {
        let ids: Vec<String> = entities
            .iter()
            .filter_map(|entity| entity.id().map(str::to_string))
            .collect();

        let removed = self
            .store
            .delete_all(T::COLLECTION, &ids)
            .await
            .with_context(|| format!("Failed to delete from {}", T::COLLECTION))?;

        info!("Deleted {} documents from {}", removed, T::COLLECTION);
        Ok(removed)
    }

    async fn find_by_prefix(&self, field: &str, prefix: &str) -> Result<Vec<T>> {
        let documents = self
            .store
            .find_by_prefix(T::COLLECTION, field, prefix)
            .await
            .with_context(|| format!("Failed to search {} by {}", T::COLLECTION, field))?;

        decode_all(documents)
    }
}

impl Repository<Person> {
    /// People whose name starts with `prefix`, ignoring case
    pub async fn find_by_name(&self, prefix: &str) -> Result<Vec<Person>> {
        self.find_by_prefix("name", prefix).await
    }
}

impl Repository<User> {
    /// First user whose email starts with `prefix`, ignoring case
    ///
    /// This is a prefix match: `a@x` also finds a user registered as `a@x.org`.
    pub async fn find_by_email(&self, prefix: &str) -> Result<Option<User>> {
        Ok(self.find_by_prefix("email", prefix).await?.into_iter().next())
    }
}

fn decode_all<T: Document>(documents: Vec<serde_json::Value>) -> Result<Vec<T>> {
    documents
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .with_context(|| format!("Malformed document in {}", T::COLLECTION))
}
