//! In-memory implementation of the `MessageRepository` port.
//!
//! Provides a simple, thread-safe repository for unit testing without
//! database dependencies. Not suitable for production use.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::message::{
    domain::{Message, MessageBody, MessageDraft, MessageId, PersistedMessageData},
    error::RepositoryError,
    ports::repository::{MessageRepository, RepositoryResult},
};

/// Interior state: rows keyed by id plus the next id to assign.
#[derive(Debug)]
struct BoardState {
    rows: BTreeMap<i32, Message>,
    next_id: i32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of [`MessageRepository`].
///
/// Thread-safe via internal [`RwLock`]. Ids are assigned sequentially
/// from 1, mirroring a serial column; `created_at` is stamped from the
/// configured clock at insert time.
///
/// # Example
///
/// ```
/// use pinboard::message::adapters::memory::InMemoryMessageRepository;
///
/// let repo = InMemoryMessageRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Clone)]
pub struct InMemoryMessageRepository {
    state: Arc<RwLock<BoardState>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMessageRepository {
    /// Creates an empty repository stamping timestamps from the system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository with the given clock, letting tests
    /// pin insertion timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            clock,
        }
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the
    /// fallback behaviour of an empty repository. For error-propagating
    /// access, use the repository trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().map(|guard| guard.rows.len()).unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, draft: &MessageDraft) -> RepositoryResult<Message> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        let id = guard.next_id;
        // Saturating keeps the arithmetic total; exhausting i32 ids is
        // unreachable in any test this adapter serves.
        guard.next_id = guard.next_id.saturating_add(1);

        let message = Message::from_persisted(PersistedMessageData {
            id: MessageId::from_i32(id),
            body: draft.body().clone(),
            username: draft.username().clone(),
            created_at: self.clock.utc(),
        });

        guard.rows.insert(id, message.clone());
        Ok(message)
    }

    async fn list(&self) -> RepositoryResult<Vec<Message>> {
        let guard = self
            .state
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        // BTreeMap iteration yields ascending ids, i.e. insertion order.
        Ok(guard.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>> {
        let guard = self
            .state
            .read()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard.rows.get(&id.into_inner()).cloned())
    }

    async fn update_body(&self, id: MessageId, body: &MessageBody) -> RepositoryResult<Message> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        guard.rows.get_mut(&id.into_inner()).map_or(
            Err(RepositoryError::NotFound(id)),
            |message| {
                message.replace_body(body.clone());
                Ok(message.clone())
            },
        )
    }

    async fn delete(&self, id: MessageId) -> RepositoryResult<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| RepositoryError::connection(format!("lock poisoned: {e}")))?;

        guard
            .rows
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
