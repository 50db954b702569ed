//! `PostgreSQL` repository implementation for message storage.

use super::{
    models::{MessageRow, NewMessageRow},
    schema::messages,
};
use crate::message::{
    domain::{Message, MessageBody, MessageDraft, MessageId, PersistedMessageData, Username},
    error::RepositoryError,
    ports::repository::{MessageRepository, RepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by message adapters.
pub type MessagePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed message repository.
///
/// Uses Diesel with connection pooling via r2d2. Diesel is synchronous,
/// so every operation runs under [`tokio::task::spawn_blocking`] to
/// keep the async executor's worker threads free.
#[derive(Debug, Clone)]
pub struct PostgresMessageRepository {
    pool: MessagePgPool,
}

impl PostgresMessageRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|e| RepositoryError::connection(e.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(|e| RepositoryError::connection(format!("task join error: {e}")))?
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    async fn create(&self, draft: &MessageDraft) -> RepositoryResult<Message> {
        let new_row = NewMessageRow {
            body: draft.body().as_str().to_owned(),
            username: draft.username().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)?;
            row_to_message(row)
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<Message>> {
        self.run_blocking(|connection| {
            let rows = messages::table
                .order(messages::id.asc())
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: MessageId) -> RepositoryResult<Option<Message>> {
        self.run_blocking(move |connection| {
            let row = messages::table
                .find(id.into_inner())
                .select(MessageRow::as_select())
                .first::<MessageRow>(connection)
                .optional()?;
            row.map(row_to_message).transpose()
        })
        .await
    }

    async fn update_body(&self, id: MessageId, body: &MessageBody) -> RepositoryResult<Message> {
        let new_body = body.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = diesel::update(messages::table.find(id.into_inner()))
                .set(messages::body.eq(new_body))
                .returning(MessageRow::as_returning())
                .get_result::<MessageRow>(connection)
                .optional()?;
            row.map_or(Err(RepositoryError::NotFound(id)), row_to_message)
        })
        .await
    }

    async fn delete(&self, id: MessageId) -> RepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(messages::table.find(id.into_inner()))
                .execute(connection)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Maps a stored row back into the domain entity, re-validating the
/// value objects so corrupt rows surface as errors rather than panics.
fn row_to_message(row: MessageRow) -> RepositoryResult<Message> {
    let MessageRow {
        id,
        body: stored_body,
        username: stored_username,
        created_at,
    } = row;

    let body = MessageBody::new(stored_body)
        .map_err(|e| RepositoryError::serialization(format!("stored body invalid: {e}")))?;
    let username = Username::new(stored_username)
        .map_err(|e| RepositoryError::serialization(format!("stored username invalid: {e}")))?;

    Ok(Message::from_persisted(PersistedMessageData {
        id: MessageId::from_i32(id),
        body,
        username,
        created_at,
    }))
}
