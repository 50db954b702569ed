//! Persistence error types for the message resource.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::MessageId;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during message persistence.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No message exists with the given identifier.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// Stored data could not be mapped back into domain types.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A connection error occurred.
    #[error("connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        // Row absence is handled at query sites via `.optional()`, so by
        // the time a Diesel error reaches this conversion it is a real
        // database failure rather than a missing-id condition.
        Self::database(err)
    }
}
