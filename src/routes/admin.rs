use axum::{
    routing::post,
    Router, middleware,
};
use crate::state::AppState;
use crate::handlers::admin::cleanup_expired_proxies;
use crate::middleware::auth::require_admin;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/cleanup-expired", post(cleanup_expired_proxies))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}
