//! `PostgreSQL` adapters for message persistence.

mod models;
mod repository;
mod schema;

use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::message::error::RepositoryError;

pub use repository::{MessagePgPool, PostgresMessageRepository};

/// Schema migrations embedded at compile time and applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies any pending schema migrations on the given connection.
///
/// # Errors
///
/// Returns [`RepositoryError::Connection`] when a migration fails to
/// apply.
pub fn run_migrations(connection: &mut PgConnection) -> Result<(), RepositoryError> {
    connection
        .run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| RepositoryError::connection(e.to_string()))
}
