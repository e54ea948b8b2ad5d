use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ProxyPlan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub country: Option<String>,
    pub protocol: String,
    pub duration_days: i32,
    pub price: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
