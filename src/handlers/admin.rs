use axum::extract::{Extension, State};
use axum::Json;
use tracing::{error, info, instrument};

use crate::dtos::admin::CleanupResponse;
use crate::error::AppError;
use crate::messages;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

// POST /api/admin/cleanup-expired
#[instrument(skip_all, fields(admin_id = auth.user.id))]
pub async fn cleanup_expired_proxies(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<CleanupResponse>, AppError> {
    let updated_count = state.proxies.cleanup_expired().await.map_err(|e| {
        error!(error = %e, "cleanup_expired_proxies failed");
        AppError::server(messages::CLEANUP_FAILED)
    })?;

    info!(updated_count, role = %auth.user.role, "Expired proxies cleaned up");
    Ok(Json(CleanupResponse { updated_count }))
}
