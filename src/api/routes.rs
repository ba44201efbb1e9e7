//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::user_routes;
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(user_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "User directory service"
}

/// Machine-readable API description
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
