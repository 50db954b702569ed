//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;
use pinboard::message::{
    adapters::memory::InMemoryMessageRepository,
    domain::{Message, MessageDraft},
    ports::repository::MessageRepository,
};
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryMessageRepository {
    InMemoryMessageRepository::new()
}

/// Clock pinned to a fixed instant so insertion timestamps are exact.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(pub DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A repository whose clock always reports the given instant.
pub fn repo_at(instant: DateTime<Utc>) -> InMemoryMessageRepository {
    InMemoryMessageRepository::with_clock(Arc::new(FrozenClock(instant)))
}

/// Persists a handful of drafts and returns them for verification.
///
/// # Errors
///
/// Returns an error if any draft creation or store operation fails.
pub fn post_sample_messages(
    rt: &Runtime,
    repo: &InMemoryMessageRepository,
) -> Result<Vec<Message>, Box<dyn std::error::Error + Send + Sync>> {
    let drafts = [
        MessageDraft::new("Hello 👋", "Liza")?,
        MessageDraft::new("Morning all", "Duane")?,
        MessageDraft::new("Anyone around?", "Liza")?,
    ];

    let mut stored = Vec::with_capacity(drafts.len());
    for draft in &drafts {
        stored.push(rt.block_on(repo.create(draft))?);
    }

    Ok(stored)
}
