//! Route handlers for the message resource.

use super::{AppState, error::ApiError};
use crate::message::domain::{Message, MessageId};
use crate::message::services::PostMessageRequest;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for `POST /messages`.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    /// Message text.
    pub body: String,
    /// Author name.
    pub username: String,
}

/// Request body for `PATCH /messages/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    /// Replacement message text.
    pub body: String,
}

/// JSON representation of a message returned by the API.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Store-assigned identifier.
    pub id: i32,
    /// Message text.
    pub body: String,
    /// Author name.
    pub username: String,
    /// Creation timestamp, RFC 3339.
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id().into_inner(),
            created_at: message.created_at(),
            username: message.username().as_str().to_owned(),
            body: message.body().as_str().to_owned(),
        }
    }
}

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// `GET /messages` — all messages, ordered by ascending id.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = state.service().list().await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// `POST /messages` — create a message from `{body, username}`.
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let message = state
        .service()
        .post(PostMessageRequest::new(request.body, request.username))
        .await?;
    tracing::debug!(id = %message.id(), "message created");
    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}

/// `PATCH /messages/{id}` — replace the body of an existing message.
pub async fn update_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = state
        .service()
        .edit_body(MessageId::from_i32(id), request.body)
        .await?;
    Ok(Json(MessageResponse::from(message)))
}

/// `DELETE /messages/{id}` — remove a message.
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.service().remove(MessageId::from_i32(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
