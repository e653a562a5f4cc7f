//! Common library for the catalog service
//!
//! This crate provides the storage layer shared by the service binaries:
//! PostgreSQL connectivity, the document store abstraction with its
//! backends, and the associated error types.

pub mod database;
pub mod documents;
pub mod error;

/// Example usage of the document store
///
/// ```rust,no_run
/// use common::database::{DatabaseConfig, init_pool};
/// use common::documents::{DocumentStore, PgDocumentStore};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig::from_env()?;
///     let store = PgDocumentStore::new(init_pool(&config).await?);
///     store.ensure_schema().await?;
///     let saved = store.save("items", json!({"name": "pen"})).await?;
///     println!("Stored document {}", saved["id"]);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
