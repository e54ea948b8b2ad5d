use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, State};
use axum::Json;
use tracing::{debug, info, instrument};

use crate::dtos::user::{AuthResponse, LoginRequest, RegisterUserRequest};
use crate::error::AppError;
use crate::messages;
use crate::middleware::auth::AuthContext;
use crate::models::user::User;
use crate::state::AppState;

// POST /api/auth/register
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        debug!(error = %e, "Rejected registration body");
        AppError::validation(messages::REGISTRATION_FAILED)
    })?;

    let mut user = state.auth.register(payload).await?;

    // A fresh account never starts with credit, whatever the store reported.
    user.balance = 0.0;

    let token = state.auth.create_session_token(&user)?;

    info!(user_id = user.id, username = %user.username, "User registered");
    Ok(Json(AuthResponse { user, token }))
}

// POST /api/auth/login
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        debug!(error = %e, "Rejected login body");
        AppError::validation(messages::INVALID_REQUEST_BODY)
    })?;

    let user = state.auth.authenticate(&payload.username, &payload.password).await?;
    let token = state.auth.create_session_token(&user)?;

    info!(user_id = user.id, "User logged in");
    Ok(Json(AuthResponse { user, token }))
}

// GET /api/auth/me
pub async fn get_me(Extension(auth): Extension<AuthContext>) -> Json<User> {
    Json(auth.user)
}
