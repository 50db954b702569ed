//! Identifier newtype for board messages.
//!
//! Wraps the store-assigned row id to prevent accidental mixing with
//! other integers flowing through the HTTP layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a board message.
///
/// Identifiers are assigned by the storage layer on insert and are
/// immutable thereafter; the domain never invents one.
///
/// # Examples
///
/// ```
/// use pinboard::message::domain::MessageId;
///
/// let id = MessageId::from_i32(7);
/// assert_eq!(id.into_inner(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i32);

impl MessageId {
    /// Creates a message identifier from a raw row id.
    #[must_use]
    pub const fn from_i32(id: i32) -> Self {
        Self(id)
    }

    /// Returns the inner row id.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for MessageId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
