//! Service layer for board message operations.

use crate::message::{
    domain::{DraftError, Message, MessageBody, MessageDraft, MessageId},
    error::RepositoryError,
    ports::MessageRepository,
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for posting a new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageRequest {
    body: String,
    username: String,
}

impl PostMessageRequest {
    /// Creates a request from raw body text and author name.
    #[must_use]
    pub fn new(body: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            username: username.into(),
        }
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum MessageBoardError {
    /// Draft validation failed.
    #[error(transparent)]
    Draft(#[from] DraftError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, MessageBoardError>;

/// Board orchestration service.
///
/// Validates incoming payloads into domain drafts and delegates
/// persistence to the configured repository.
#[derive(Clone)]
pub struct MessageBoardService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageBoardService {
    /// Creates a new board service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// Posts a new message to the board.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn post(&self, request: PostMessageRequest) -> BoardResult<Message> {
        let draft = MessageDraft::new(request.body, request.username)?;
        Ok(self.repository.create(&draft).await?)
    }

    /// Returns all messages on the board, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError`] when the repository query fails.
    pub async fn list(&self) -> BoardResult<Vec<Message>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a single message by id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError`] when the repository query fails.
    pub async fn find(&self, id: MessageId) -> BoardResult<Option<Message>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Replaces the body of an existing message.
    ///
    /// Only the body changes; id, username, and creation timestamp are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError`] when validation fails, the message
    /// does not exist, or the repository rejects the update.
    pub async fn edit_body(&self, id: MessageId, body: impl Into<String>) -> BoardResult<Message> {
        let new_body = MessageBody::new(body)?;
        Ok(self.repository.update_body(id, &new_body).await?)
    }

    /// Removes a message from the board.
    ///
    /// # Errors
    ///
    /// Returns [`MessageBoardError`] when the message does not exist or
    /// the repository rejects the delete.
    pub async fn remove(&self, id: MessageId) -> BoardResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}
