//! Application services for the message resource.
//!
//! Services orchestrate domain validation and persistence, giving the
//! HTTP layer a single seam to call through.

mod board;

pub use board::{BoardResult, MessageBoardError, MessageBoardService, PostMessageRequest};
