pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod proxy_plans;

use axum::Router;
use crate::state::AppState;

/// JSON API, mounted under `/api`.
pub fn create_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::routes(state))
        .merge(proxy_plans::routes())
        .merge(admin::routes(state))
}
