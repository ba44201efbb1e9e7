//! End-to-end tests for the HTTP surface.
//!
//! The full router runs against an in-memory SQLite store; no network
//! listener is involved.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use user_directory::api::{create_router, AppState};
use user_directory::config::{Config, StatusPolicy};
use user_directory::infra::{Database, UserStore};

async fn app(policy: StatusPolicy) -> Router {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        status_policy: policy,
        ..Config::default()
    };
    let db = Database::connect(&config).await.unwrap();
    let state = AppState::new(Arc::new(UserStore::new(db.get_connection())), policy);
    create_router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn alice() -> Value {
    json!({
        "user_name": "alice",
        "first_name": "Alice",
        "last_name": "A",
        "email": "a@x.com",
        "department": "Eng",
        "user_status": "A"
    })
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_create_user_scenario() {
    let app = app(StatusPolicy::Uniform).await;

    let (status, body) = send(&app, "POST", "/users", Some(alice())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "User created successfully",
            "data": {
                "user_id": 1,
                "user_name": "alice",
                "first_name": "Alice",
                "last_name": "A",
                "email": "a@x.com",
                "department": "Eng",
                "user_status": "A"
            }
        })
    );
}

#[tokio::test]
async fn test_duplicate_username_scenario() {
    let app = app(StatusPolicy::Uniform).await;
    send(&app, "POST", "/users", Some(alice())).await;

    let (status, body) = send(&app, "POST", "/users", Some(alice())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "message": "Username already exists",
            "error": "username 'alice' already exists"
        })
    );

    let (_, list) = send(&app, "GET", "/users", None).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_missing_user_scenario() {
    let app = app(StatusPolicy::Uniform).await;

    let (status, body) = send(&app, "GET", "/users/999", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "User not found");
    assert!(!body["error"].as_str().unwrap().is_empty());
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[tokio::test]
async fn test_create_get_update_list() {
    let app = app(StatusPolicy::Uniform).await;

    let (_, created) = send(&app, "POST", "/users", Some(alice())).await;
    let id = created["data"]["user_id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["message"], "User retrieved successfully");
    assert_eq!(fetched["data"], created["data"]);

    let mut replacement = alice();
    replacement["email"] = json!("alice@new.example");
    replacement["department"] = Value::Null;
    let (status, updated) = send(&app, "PUT", &format!("/users/{}", id), Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "User updated successfully");
    assert_eq!(updated["data"]["email"], "alice@new.example");
    assert!(updated["data"]["department"].is_null());

    let (status, list) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["message"], "Users retrieved successfully");
    assert_eq!(list["data"], json!([updated["data"].clone()]));
}

#[tokio::test]
async fn test_list_empty_table() {
    let app = app(StatusPolicy::Uniform).await;

    let (status, body) = send(&app, "GET", "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Users retrieved successfully", "data": [] }));
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = app(StatusPolicy::Uniform).await;

    let (status, body) = send(&app, "PUT", "/users/5", Some(alice())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to update user");

    let (_, list) = send(&app, "GET", "/users", None).await;
    assert_eq!(list["data"], json!([]));
}

// =============================================================================
// Status policy
// =============================================================================

#[tokio::test]
async fn test_semantic_policy_statuses() {
    let app = app(StatusPolicy::Semantic).await;
    send(&app, "POST", "/users", Some(alice())).await;

    let (status, _) = send(&app, "POST", "/users", Some(alice())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, "GET", "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "GET", "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user ID");
}

// =============================================================================
// Ancillary routes
// =============================================================================

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app(StatusPolicy::Uniform).await;

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/users"].is_object());
    assert!(doc["paths"]["/users/{id}"]["put"].is_object());
}
