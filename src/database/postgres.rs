// src/database/postgres.rs
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use super::{PlanStore, ProxyStore, StoreError, UserStore};
use crate::models::proxy_plan::ProxyPlan;
use crate::models::user::{NewUser, UserRecord};

const USER_COLUMNS: &str = "id, username, password_hash, full_name, role,
                balance::FLOAT8 AS balance, created_at";

/// Postgres-backed implementation of every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "INSERT INTO users (username, password_hash, full_name, role, balance)
             VALUES ($1, $2, $3, $4, 0)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }
}

#[async_trait]
impl PlanStore for PgStore {
    #[instrument(skip(self))]
    async fn list_active(&self) -> Result<Vec<ProxyPlan>, StoreError> {
        let plans = sqlx::query_as::<_, ProxyPlan>(
            "SELECT id, name, description, country, protocol, duration_days,
                    price::FLOAT8 AS price,
                    is_active, created_at
             FROM proxy_plans
             WHERE is_active = $1
             ORDER BY price ASC, id ASC"
        )
        .bind(true)
        .fetch_all(&self.pool)
        .await?;
        Ok(plans)
    }
}

#[async_trait]
impl ProxyStore for PgStore {
    #[instrument(skip(self))]
    async fn cleanup_expired(&self) -> Result<i64, StoreError> {
        let updated = sqlx::query_scalar::<_, i64>("SELECT cleanup_expired_proxies()")
            .fetch_one(&self.pool)
            .await?;
        Ok(updated)
    }
}
