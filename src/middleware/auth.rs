use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http::{header::AUTHORIZATION, HeaderMap};
use tracing::warn;

use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Clone)]
pub struct AuthContext {
    pub user: User,
}

/// Extracts `<token>` from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

pub async fn session_user(state: &AppState, headers: &HeaderMap) -> Option<User> {
    let token = bearer_token(headers)?;
    state.auth.verify_session_token(token).await
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = session_user(&state, req.headers())
        .await
        .ok_or_else(AppError::unauthorized)?;

    req.extensions_mut().insert(AuthContext { user });
    Ok(next.run(req).await)
}

/// Like [`require_auth`], but only admins and super admins get through.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = session_user(&state, req.headers())
        .await
        .ok_or_else(AppError::unauthorized)?;

    if !user.role.is_admin() {
        warn!(user_id = user.id, role = %user.role, path = %req.uri().path(), "Non-admin hit admin route");
        return Err(AppError::unauthorized());
    }

    req.extensions_mut().insert(AuthContext { user });
    Ok(next.run(req).await)
}
