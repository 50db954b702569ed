//! Shared helpers for HTTP API tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use pinboard::http;
use pinboard::message::{
    adapters::memory::InMemoryMessageRepository, services::MessageBoardService,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

/// A decoded response: status, content type, and parsed JSON body
/// (`Value::Null` when the body is empty).
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// The `Content-Type` header, if present.
    pub content_type: Option<String>,
    /// Parsed JSON body.
    pub json: Value,
}

/// Builds a router over a fresh, empty in-memory board.
pub fn app() -> Router {
    http::router(Arc::new(MessageBoardService::new(Arc::new(
        InMemoryMessageRepository::new(),
    ))))
}

/// Sends one request through the router and decodes the response.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> ApiResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body readable")
        .to_bytes();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };

    ApiResponse {
        status,
        content_type,
        json: parsed,
    }
}

/// Posts a message and returns the created JSON object.
pub async fn post_message(app: &Router, body: &str, username: &str) -> Value {
    let response = send(
        app,
        "POST",
        "/messages",
        Some(json!({ "body": body, "username": username })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json
}
