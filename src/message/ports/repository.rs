//! Repository port for message persistence.
//!
//! Defines the abstract interface for storing and retrieving board
//! messages, allowing different persistence implementations
//! (`PostgreSQL`, in-memory, etc.).

use crate::message::{
    domain::{Message, MessageBody, MessageDraft, MessageId},
    error::RepositoryError,
};
use async_trait::async_trait;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Port for message persistence operations.
///
/// Implementations provide the actual storage mechanism while the
/// domain logic remains storage-agnostic.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Ids are unique within the store and assigned on insert
/// - `created_at` is assigned at insert time and never changes
/// - Only the body of an existing message is ever mutated
/// - Concurrent access is handled safely
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persists a draft and returns the stored message with its
    /// assigned id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the insert fails.
    async fn create(&self, draft: &MessageDraft) -> RepositoryResult<Message>;

    /// Retrieves all messages ordered by ascending id.
    ///
    /// Returns an empty vector when the board holds no messages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn list(&self) -> RepositoryResult<Vec<Message>>;

    /// Retrieves a message by its id.
    ///
    /// Returns `None` if the message does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the query fails.
    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>>;

    /// Replaces the body of an existing message and returns the
    /// updated row. All other fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no message has the
    /// given id, or another `RepositoryError` if the update fails.
    async fn update_body(&self, id: MessageId, body: &MessageBody) -> RepositoryResult<Message>;

    /// Removes a message from the store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no message has the
    /// given id, or another `RepositoryError` if the delete fails.
    async fn delete(&self, id: MessageId) -> RepositoryResult<()>;
}
