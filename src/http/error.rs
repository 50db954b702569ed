//! Error responses for the HTTP surface.

use crate::message::{error::RepositoryError, services::MessageBoardError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error returned by route handlers.
///
/// Wraps the service error and decides its HTTP representation:
/// validation failures are the client's fault (422), a missing id is
/// 404, and anything else is a 500 whose detail goes to the log rather
/// than the client.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] MessageBoardError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MessageBoardError::Draft(err) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            MessageBoardError::Repository(RepositoryError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("message not found: {id}"))
            }
            MessageBoardError::Repository(err) => {
                tracing::error!(error = %err, "repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
