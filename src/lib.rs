// src/lib.rs
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Full application router with state applied.
pub fn app(state: AppState) -> Router {
    let api = routes::create_router(&state);

    Router::new()
        .nest("/api", api)
        .merge(routes::dashboard::routes())
        .route("/health", get(health_check))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
