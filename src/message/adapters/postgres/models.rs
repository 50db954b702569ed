//! Diesel row models for message persistence.

use super::schema::messages;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Store-assigned identifier.
    pub id: i32,
    /// Message text.
    pub body: String,
    /// Author name recorded at creation.
    pub username: String,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for message records.
///
/// Omits `id` and `created_at`; the database assigns both.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Message text.
    pub body: String,
    /// Author name.
    pub username: String,
}
