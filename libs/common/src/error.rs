//! Custom error types for the common library
//!
//! This module defines the errors raised by the database bootstrap code and
//! by the document store backends.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Error type for document store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing database rejected or failed the operation
    #[error("Document query error: {0}")]
    Query(#[from] SqlxError),

    /// A document could not be converted to or from JSON
    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The prefix used for a lookup is not a valid expression
    #[error("Invalid prefix pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A stored document does not have the expected shape
    #[error("Corrupt document in collection {collection}: {reason}")]
    Corrupt { collection: String, reason: String },

    /// The in-process store lock was poisoned by a panicking writer
    #[error("Document store lock poisoned")]
    Poisoned,
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
