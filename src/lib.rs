//! Pinboard: a message-board backend.
//!
//! This crate exposes a single persisted resource — the board message —
//! through a JSON HTTP API supporting create, list, partial-update, and
//! delete operations, persisted via Diesel over `PostgreSQL`.
//!
//! # Architecture
//!
//! Pinboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`message`]: The message entity, its repository port, and adapters
//! - [`http`]: Route handlers translating HTTP requests into service calls
//! - [`config`]: Environment-driven server configuration

pub mod config;
pub mod http;
pub mod message;
