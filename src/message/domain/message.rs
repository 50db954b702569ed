//! The Message entity and its validated value objects.
//!
//! A message is created from a [`MessageDraft`] (body plus username);
//! the storage layer assigns the id and creation timestamp, so the full
//! entity only exists once an adapter has persisted the draft.

use super::MessageId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Maximum accepted message body size in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Maximum accepted username length in characters.
pub const MAX_USERNAME_CHARS: usize = 80;

/// Errors that can occur when validating draft fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The message body is empty or whitespace-only.
    #[error("message body cannot be empty")]
    EmptyBody,

    /// The message body exceeds the size limit.
    #[error("message body is {actual_bytes} bytes, exceeds limit of {limit_bytes} bytes")]
    BodyTooLarge {
        /// The actual size in bytes.
        actual_bytes: usize,
        /// The maximum allowed size.
        limit_bytes: usize,
    },

    /// The username is empty or whitespace-only.
    #[error("username cannot be empty")]
    EmptyUsername,

    /// The username exceeds the length limit.
    #[error("username is {actual} characters, exceeds limit of {max}")]
    UsernameTooLong {
        /// The actual length in characters.
        actual: usize,
        /// The maximum allowed length.
        max: usize,
    },
}

/// Validated message text.
///
/// Non-empty after trimming and at most [`MAX_BODY_BYTES`] bytes.
/// Surrounding whitespace is preserved; only all-whitespace bodies are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageBody(String);

impl MessageBody {
    /// Validates and wraps message text.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyBody`] for empty or whitespace-only
    /// input, and [`DraftError::BodyTooLarge`] when the input exceeds
    /// [`MAX_BODY_BYTES`].
    pub fn new(body: impl Into<String>) -> Result<Self, DraftError> {
        let text = body.into();
        if text.trim().is_empty() {
            return Err(DraftError::EmptyBody);
        }
        if text.len() > MAX_BODY_BYTES {
            return Err(DraftError::BodyTooLarge {
                actual_bytes: text.len(),
                limit_bytes: MAX_BODY_BYTES,
            });
        }
        Ok(Self(text))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated author name.
///
/// Non-empty after trimming and at most [`MAX_USERNAME_CHARS`]
/// characters. Recorded at creation and immutable thereafter; no
/// operation on the board mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates and wraps an author name.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyUsername`] for empty or
    /// whitespace-only input, and [`DraftError::UsernameTooLong`] when
    /// the input exceeds [`MAX_USERNAME_CHARS`].
    pub fn new(username: impl Into<String>) -> Result<Self, DraftError> {
        let name = username.into();
        if name.trim().is_empty() {
            return Err(DraftError::EmptyUsername);
        }
        let length = name.chars().count();
        if length > MAX_USERNAME_CHARS {
            return Err(DraftError::UsernameTooLong {
                actual: length,
                max: MAX_USERNAME_CHARS,
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A not-yet-persisted message: validated body and username, awaiting a
/// store-assigned id and timestamp.
///
/// # Examples
///
/// ```
/// use pinboard::message::domain::MessageDraft;
///
/// let draft = MessageDraft::new("Hello 👋", "Liza").expect("valid draft");
/// assert_eq!(draft.body().as_str(), "Hello 👋");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    body: MessageBody,
    username: Username,
}

impl MessageDraft {
    /// Validates raw input into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when either field fails validation.
    pub fn new(
        body: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, DraftError> {
        Ok(Self {
            body: MessageBody::new(body)?,
            username: Username::new(username)?,
        })
    }

    /// Returns the draft body.
    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Returns the draft username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }
}

/// Field carrier for reconstructing a [`Message`] from persisted state.
///
/// Adapters populate this from a stored row (or, for the in-memory
/// store, from the draft plus their own id and clock) and hand it to
/// [`Message::from_persisted`].
#[derive(Debug, Clone)]
pub struct PersistedMessageData {
    /// Store-assigned identifier.
    pub id: MessageId,
    /// Message text.
    pub body: MessageBody,
    /// Author name recorded at creation.
    pub username: Username,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A message on the board.
///
/// # Invariants
///
/// - `id` is unique within the store and immutable
/// - `created_at` is always populated, assigned at insert time
/// - `body` and `username` satisfy the value-object rules
/// - Only the body may change after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Store-assigned identifier.
    id: MessageId,

    /// Message text; the only mutable field.
    body: MessageBody,

    /// Author name recorded at creation.
    username: Username,

    /// When the message was inserted.
    created_at: DateTime<Utc>,
}

impl Message {
    /// Reconstructs a message from persisted state.
    #[must_use]
    pub fn from_persisted(data: PersistedMessageData) -> Self {
        let PersistedMessageData {
            id,
            body,
            username,
            created_at,
        } = data;
        Self {
            id,
            body,
            username,
            created_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message body.
    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Returns the author name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the message body, the one mutation the board permits.
    pub fn replace_body(&mut self, body: MessageBody) {
        self.body = body;
    }
}
