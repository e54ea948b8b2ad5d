use axum::{extract::State, Json};
use tracing::{error, instrument};

use crate::error::AppError;
use crate::messages;
use crate::models::proxy_plan::ProxyPlan;
use crate::state::AppState;

// GET /api/proxy-plans - active plans, cheapest first
#[instrument(skip(state))]
pub async fn list_proxy_plans(State(state): State<AppState>) -> Result<Json<Vec<ProxyPlan>>, AppError> {
    match state.plans.list_active().await {
        Ok(plans) => Ok(Json(plans)),
        Err(e) => {
            error!(error = %e, "Failed to fetch proxy plans");
            Err(AppError::server(messages::PLANS_LOAD_FAILED))
        }
    }
}
