//! Centralized error handling.
//!
//! Every failure in the request pipeline is one of these variants. The
//! handlers decide the envelope message; the variant decides the HTTP status
//! under the configured [`StatusPolicy`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::StatusPolicy;
use crate::types::ApiError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// No row exists for the given user id.
    #[error("user with id {0} not found")]
    NotFound(i64),

    /// The username is already taken by another row.
    #[error("username '{0}' already exists")]
    DuplicateUsername(String),

    /// Malformed request body or non-numeric path id.
    #[error("{0}")]
    InvalidInput(String),

    /// Any failure reported by the relational store.
    #[error("{0}")]
    Store(#[from] sea_orm::DbErr),

    // Bootstrap failures (bind, seed file I/O)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code under the given policy
    pub fn status(&self, policy: StatusPolicy) -> StatusCode {
        match policy {
            StatusPolicy::Uniform => StatusCode::INTERNAL_SERVER_ERROR,
            StatusPolicy::Semantic => match self {
                AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
                AppError::DuplicateUsername(_) => StatusCode::CONFLICT,
                AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Fixed envelope message used when no handler supplied a better one
    fn summary(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "User not found",
            AppError::DuplicateUsername(_) => "Username already exists",
            AppError::InvalidInput(_) => "Invalid request",
            AppError::Store(_) => "Database error",
            AppError::Internal(_) => "Internal server error",
        }
    }

    /// Build the error envelope for this failure under a handler-chosen message.
    pub fn to_api_error(&self, message: impl Into<String>, policy: StatusPolicy) -> ApiError {
        ApiError::new(message, self.to_string()).with_status(self.status(policy))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(ref e) = self {
            tracing::error!("Database error: {:?}", e);
        }
        self.to_api_error(self.summary(), StatusPolicy::default())
            .into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
