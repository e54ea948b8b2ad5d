use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use http::HeaderMap;

use crate::dashboard::{AuthGate, GateView};
use crate::middleware::auth::session_user;
use crate::state::AppState;

// GET /dashboard
pub async fn dashboard_shell(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let gate = AuthGate::Loading.resolve(session_user(&state, &headers).await);

    match gate.view() {
        // Auth is settled before the server renders, so only client-side gates
        // sit in Loading. Kept so the match follows the gate's views.
        GateView::Spinner => Html(SPINNER).into_response(),
        GateView::Redirect(to) => Redirect::to(to).into_response(),
        // Only server-generated values go into the markup; usernames can come
        // from rows that never went through registration.
        GateView::Content(user) => Html(format!(
            "<!doctype html><html><head><meta charset=\"utf-8\"><title>ProxyShop</title></head>\
             <body><header data-user-id=\"{}\" data-role=\"{}\"></header>\
             <main id=\"dashboard\"></main></body></html>",
            user.id, user.role
        ))
        .into_response(),
    }
}

const SPINNER: &str =
    "<!doctype html><html><body><div class=\"spinner\" role=\"status\"></div></body></html>";
