// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use crate::auth::service::AuthError;
use crate::database::StoreError;
use crate::messages;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(StoreError),
    Unauthorized(&'static str),
    ValidationError(String),
    /// 500 with a handler-chosen message; the cause is logged at the call site.
    Server(&'static str),
    /// 500 with the generic message; the detail is only logged.
    Internal(String),
}

impl AppError {
    pub fn db(err: StoreError) -> Self {
        AppError::DatabaseError(err)
    }

    pub fn unauthorized() -> Self {
        AppError::Unauthorized(messages::UNAUTHORIZED)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn server(msg: &'static str) -> Self {
        AppError::Server(msg)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal(detail.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(e) => {
                tracing::error!(error = %e, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR.to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!(%detail, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR.to_string())
            }
            AppError::Server(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(err)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Invalid(e) => AppError::validation(e.to_string()),
            AuthError::UsernameTaken => AppError::validation(messages::USERNAME_TAKEN),
            AuthError::InvalidCredentials => AppError::Unauthorized(messages::INVALID_CREDENTIALS),
            AuthError::Store(e) => AppError::db(e),
            other => AppError::internal(other.to_string()),
        }
    }
}
