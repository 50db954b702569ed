//! End-to-end tests for the message routes.

use crate::http_api::helpers::{app, post_message, send};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["status"], "ok");
}

#[tokio::test]
async fn list_is_empty_for_a_fresh_board() {
    let app = app();
    let response = send(&app, "GET", "/messages", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json, json!([]));
}

#[tokio::test]
async fn post_returns_the_created_message_as_json() {
    let app = app();
    let response = send(
        &app,
        "POST",
        "/messages",
        Some(json!({ "body": "Hello 👋", "username": "Liza" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let content_type = response.content_type.expect("content type present");
    assert!(content_type.starts_with("application/json"));

    assert_eq!(response.json["body"], "Hello 👋");
    assert_eq!(response.json["username"], "Liza");
    assert!(response.json["id"].is_i64());
    assert!(response.json["created_at"].is_string());
}

#[tokio::test]
async fn post_creates_a_message_in_the_store() {
    let app = app();
    let created = post_message(&app, "Hello 👋", "Liza").await;

    let listed = send(&app, "GET", "/messages", None).await;
    assert_eq!(listed.status, StatusCode::OK);

    let items = listed.json.as_array().expect("array body");
    assert!(items.iter().any(|item| item["id"] == created["id"]
        && item["body"] == "Hello 👋"
        && item["username"] == "Liza"));
}

#[tokio::test]
async fn list_reflects_the_full_store_contents() {
    let app = app();
    let first = post_message(&app, "Hello 👋", "Liza").await;
    let second = post_message(&app, "Morning all", "Duane").await;

    let listed = send(&app, "GET", "/messages", None).await;
    let items = listed.json.as_array().expect("array body");

    assert_eq!(items.len(), 2);
    let ids: Vec<&serde_json::Value> = items.iter().map(|item| &item["id"]).collect();
    assert_eq!(ids, vec![&first["id"], &second["id"]]);
}

#[tokio::test]
async fn patch_updates_the_body_in_the_store() {
    let app = app();
    let created = post_message(&app, "Hello 👋", "Liza").await;
    let id = created["id"].as_i64().expect("numeric id");

    let patched = send(
        &app,
        "PATCH",
        &format!("/messages/{id}"),
        Some(json!({ "body": "Goodbye 👋" })),
    )
    .await;
    assert_eq!(patched.status, StatusCode::OK);

    let listed = send(&app, "GET", "/messages", None).await;
    let items = listed.json.as_array().expect("array body");
    assert!(items
        .iter()
        .any(|item| item["id"] == created["id"] && item["body"] == "Goodbye 👋"));
}

#[tokio::test]
async fn patch_returns_the_updated_message_as_json() {
    let app = app();
    let created = post_message(&app, "Hello 👋", "Liza").await;
    let id = created["id"].as_i64().expect("numeric id");

    let patched = send(
        &app,
        "PATCH",
        &format!("/messages/{id}"),
        Some(json!({ "body": "Goodbye 👋" })),
    )
    .await;

    assert_eq!(patched.status, StatusCode::OK);
    let content_type = patched.content_type.expect("content type present");
    assert!(content_type.starts_with("application/json"));

    // Only the body changes; identity fields survive the patch.
    assert_eq!(patched.json["body"], "Goodbye 👋");
    assert_eq!(patched.json["id"], created["id"]);
    assert_eq!(patched.json["username"], created["username"]);
    assert_eq!(patched.json["created_at"], created["created_at"]);
}

#[tokio::test]
async fn patch_of_a_missing_id_returns_not_found() {
    let app = app();
    let response = send(
        &app,
        "PATCH",
        "/messages/404",
        Some(json!({ "body": "Goodbye" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.json["error"].is_string());
}

#[tokio::test]
async fn patch_with_a_blank_body_is_unprocessable() {
    let app = app();
    let created = post_message(&app, "Hello 👋", "Liza").await;
    let id = created["id"].as_i64().expect("numeric id");

    let response = send(
        &app,
        "PATCH",
        &format!("/messages/{id}"),
        Some(json!({ "body": "   " })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json["error"].is_string());
}

#[tokio::test]
async fn delete_removes_the_message_from_the_store() {
    let app = app();
    let created = post_message(&app, "New message", "Test User").await;
    let id = created["id"].as_i64().expect("numeric id");

    let deleted = send(&app, "DELETE", &format!("/messages/{id}"), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.json.is_null());

    let listed = send(&app, "GET", "/messages", None).await;
    let items = listed.json.as_array().expect("array body");
    assert!(items.iter().all(|item| item["id"] != created["id"]));
}

#[tokio::test]
async fn delete_of_a_missing_id_returns_not_found() {
    let app = app();
    let response = send(&app, "DELETE", "/messages/404", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.json["error"].is_string());
}

#[tokio::test]
async fn post_with_a_blank_body_is_unprocessable() {
    let app = app();
    let response = send(
        &app,
        "POST",
        "/messages",
        Some(json!({ "body": "", "username": "Liza" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json["error"].is_string());
}

#[tokio::test]
async fn post_with_a_blank_username_is_unprocessable() {
    let app = app();
    let response = send(
        &app,
        "POST",
        "/messages",
        Some(json!({ "body": "Hello", "username": "  " })),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json["error"].is_string());
}
