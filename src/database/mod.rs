// src/database/mod.rs
mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::Config;
use crate::models::proxy_plan::ProxyPlan;
use crate::models::user::{NewUser, UserRecord};

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Inserts with a zero balance. A taken username yields
    /// [`StoreError::UniqueViolation`].
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError>;
}

#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Active plans only, cheapest first.
    async fn list_active(&self) -> Result<Vec<ProxyPlan>, StoreError>;
}

#[async_trait]
pub trait ProxyStore: Send + Sync {
    /// Runs `cleanup_expired_proxies()` and returns the number of rows it updated.
    async fn cleanup_expired(&self) -> Result<i64, StoreError>;
}

pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
