// src/state.rs
use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::AuthService;
use crate::config::Config;
use crate::database::{PgStore, PlanStore, ProxyStore};

/// Shared, read-only handles built once at start-up.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub plans: Arc<dyn PlanStore>,
    pub proxies: Arc<dyn ProxyStore>,
}

impl AppState {
    pub fn new(auth: AuthService, plans: Arc<dyn PlanStore>, proxies: Arc<dyn ProxyStore>) -> Self {
        Self { auth: Arc::new(auth), plans, proxies }
    }

    pub fn from_pool(db_pool: PgPool, config: &Config) -> Self {
        let store = Arc::new(PgStore::new(db_pool));
        let auth = AuthService::new(store.clone(), config.jwt_secret.clone(), config.token_ttl)
            .with_bcrypt_cost(config.bcrypt_cost);
        Self::new(auth, store.clone(), store)
    }
}
