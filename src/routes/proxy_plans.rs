use axum::{routing::get, Router};
use crate::handlers::proxy_plan::list_proxy_plans;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/proxy-plans", get(list_proxy_plans))
}
