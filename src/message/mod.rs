//! The message resource: the board's single persisted entity.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::MessageDraft`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::repository::MessageRepository`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessageRepository`],
//!   [`adapters::postgres::PostgresMessageRepository`])
//! - **Services**: Orchestration between validation and persistence
//!   ([`services::MessageBoardService`])
//!
//! # Example
//!
//! ```
//! use pinboard::message::domain::MessageDraft;
//!
//! let draft = MessageDraft::new("Hello 👋", "Liza").expect("valid draft");
//! assert_eq!(draft.username().as_str(), "Liza");
//! assert_eq!(draft.body().as_str(), "Hello 👋");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
