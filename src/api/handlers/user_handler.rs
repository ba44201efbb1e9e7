//! User handlers.
//!
//! Every handler ends in exactly one envelope write. Failures never escape
//! as errors; they are turned into an error envelope here.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, ErrorEnvelope};

/// User create/replace request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[validate(length(min = 1, message = "user_name is required"))]
    #[schema(example = "alice")]
    pub user_name: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Anderson")]
    pub last_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[validate(length(equal = 1, message = "user_status must be a single character"))]
    #[schema(example = "A", min_length = 1, max_length = 1)]
    pub user_status: String,
}

impl UserRequest {
    fn into_new_user(self) -> NewUser {
        NewUser {
            user_name: self.user_name,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            user_status: self.user_status,
        }
    }

    fn into_user(self, id: i64) -> User {
        User::from_new(id, self.into_new_user())
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user))
}

fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::invalid_input("Invalid user ID"))
}

/// Write the error envelope for a failed operation.
fn failure(state: &AppState, message: &str, err: &AppError) -> Response {
    match err {
        AppError::Store(_) | AppError::Internal(_) => tracing::error!(error = %err, "{}", message),
        _ => tracing::warn!(error = %err, "{}", message),
    }
    err.to_api_error(message, state.status_policy).into_response()
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Users retrieved successfully"),
        (status = 500, description = "Failed to retrieve users", body = ErrorEnvelope)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.users.list_all().await {
        Ok(users) => ApiResponse::ok("Users retrieved successfully", users).into_response(),
        Err(e) => failure(&state, "Failed to retrieve users", &e),
    }
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User retrieved successfully"),
        (status = 500, description = "Invalid user ID or user not found", body = ErrorEnvelope)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_user_id(&id) {
        Ok(id) => id,
        Err(e) => return failure(&state, "Failed to retrieve user", &e),
    };

    match state.users.get_by_id(id).await {
        Ok(user) => ApiResponse::ok("User retrieved successfully", user).into_response(),
        Err(e) => failure(&state, "User not found", &e),
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created successfully"),
        (status = 500, description = "Invalid body, duplicate username or store failure", body = ErrorEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<UserRequest>, AppError>,
) -> Response {
    let ValidatedJson(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => return failure(&state, "Invalid request body", &e),
    };

    let user_name = payload.user_name.clone();
    match state.users.create(payload.into_new_user()).await {
        Ok(user) => ApiResponse::ok("User created successfully", user).into_response(),
        Err(e) => {
            let message = match &e {
                AppError::DuplicateUsername(taken) if *taken == user_name => {
                    "Username already exists"
                }
                _ => "Failed to create user",
            };
            failure(&state, message, &e)
        }
    }
}

/// Replace every field of an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated successfully"),
        (status = 500, description = "Invalid input or update failed", body = ErrorEnvelope)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<UserRequest>, AppError>,
) -> Response {
    let id = match parse_user_id(&id) {
        Ok(id) => id,
        Err(e) => return failure(&state, "Failed to update user", &e),
    };
    let ValidatedJson(payload) = match payload {
        Ok(payload) => payload,
        Err(e) => return failure(&state, "Invalid request body", &e),
    };

    // The path id wins over anything the body carried
    match state.users.update(payload.into_user(id)).await {
        Ok(user) => ApiResponse::ok("User updated successfully", user).into_response(),
        Err(e) => failure(&state, "Failed to update user", &e),
    }
}
