//! Port interfaces for the message resource.

pub mod repository;

pub use repository::{MessageRepository, RepositoryResult};
