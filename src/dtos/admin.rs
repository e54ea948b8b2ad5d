use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CleanupResponse {
    pub updated_count: i64,
}
