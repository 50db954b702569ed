//! HTTP surface for the board.
//!
//! Translates JSON requests into [`MessageBoardService`] calls and
//! domain results back into JSON responses. Routing, extraction, and
//! tracing are provided by axum and tower-http; everything
//! domain-shaped lives behind the service seam.

pub mod error;
pub mod handlers;

use crate::message::services::MessageBoardService;
use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<MessageBoardService>,
}

impl AppState {
    /// Wraps a board service for handler consumption.
    #[must_use]
    pub const fn new(service: Arc<MessageBoardService>) -> Self {
        Self { service }
    }

    /// Returns the board service.
    #[must_use]
    pub fn service(&self) -> &MessageBoardService {
        &self.service
    }
}

/// Builds the application router over the given board service.
///
/// Routes:
///
/// - `GET /health` — liveness probe
/// - `GET /messages` — list all messages
/// - `POST /messages` — create a message
/// - `PATCH /messages/{id}` — replace a message body
/// - `DELETE /messages/{id}` — remove a message
#[must_use]
pub fn router(service: Arc<MessageBoardService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .route(
            "/messages/{id}",
            patch(handlers::update_message).delete(handlers::delete_message),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(service))
}
