#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use proxyshop_backend::auth::AuthService;
use proxyshop_backend::database::{PlanStore, ProxyStore, StoreError, UserStore};
use proxyshop_backend::models::proxy_plan::ProxyPlan;
use proxyshop_backend::models::user::{NewUser, User, UserRecord, UserRole};
use proxyshop_backend::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const BCRYPT_TEST_COST: u32 = 4;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

pub struct MemoryUsers {
    records: Mutex<Vec<UserRecord>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    /// Balance the fake reports back from `insert`, standing in for a
    /// database default or trigger.
    insert_balance: f64,
}

impl MemoryUsers {
    pub fn new() -> Self {
        Self::with_insert_balance(0.0)
    }

    pub fn with_insert_balance(balance: f64) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            failing: AtomicBool::new(false),
            insert_balance: balance,
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn seed(&self, username: &str, password: &str, role: UserRole) -> User {
        let record = UserRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: username.to_string(),
            password_hash: bcrypt::hash(password, BCRYPT_TEST_COST).unwrap(),
            full_name: format!("{username} Test"),
            role: role.as_str().to_string(),
            balance: 10.0,
            created_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        User::try_from(record).unwrap()
    }

    pub fn remove(&self, id: i64) {
        self.records.lock().unwrap().retain(|r| r.id != id);
    }

    pub fn set_raw_role(&self, id: i64, role: &str) {
        let mut records = self.records.lock().unwrap();
        if let Some(r) = records.iter_mut().find(|r| r.id == id) {
            r.role = role.to_string();
        }
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUsers {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, StoreError> {
        self.check()?;
        Ok(self.records.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.username == username)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.username == user.username) {
            return Err(StoreError::UniqueViolation("users_username_key".into()));
        }
        let record = UserRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: user.username,
            password_hash: user.password_hash,
            full_name: user.full_name,
            role: user.role.as_str().to_string(),
            balance: self.insert_balance,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }
}

pub struct MemoryPlans {
    plans: Vec<ProxyPlan>,
    failing: AtomicBool,
}

impl MemoryPlans {
    pub fn new(plans: Vec<ProxyPlan>) -> Self {
        Self { plans, failing: AtomicBool::new(false) }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlanStore for MemoryPlans {
    async fn list_active(&self) -> Result<Vec<ProxyPlan>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let mut active: Vec<ProxyPlan> = self.plans.iter().filter(|p| p.is_active).cloned().collect();
        active.sort_by(|a, b| a.price.total_cmp(&b.price).then(a.id.cmp(&b.id)));
        Ok(active)
    }
}

pub struct MemoryProxies {
    calls: AtomicUsize,
    expired_pending: i64,
    failing: AtomicBool,
}

impl MemoryProxies {
    pub fn new(expired_pending: i64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            expired_pending,
            failing: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProxyStore for MemoryProxies {
    async fn cleanup_expired(&self) -> Result<i64, StoreError> {
        // Only the first call finds overdue rows.
        let previous = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(if previous == 0 { self.expired_pending } else { 0 })
    }
}

pub fn plan(id: i64, name: &str, price: f64, is_active: bool) -> ProxyPlan {
    ProxyPlan {
        id,
        name: name.to_string(),
        description: Some(format!("{name} plan")),
        country: Some("DE".into()),
        protocol: "socks5".into(),
        duration_days: 30,
        price,
        is_active,
        created_at: Utc::now(),
    }
}

pub fn default_plans() -> Vec<ProxyPlan> {
    vec![
        plan(1, "Business", 900.0, true),
        plan(2, "Legacy", 50.0, false),
        plan(3, "Starter", 150.0, true),
        plan(4, "Pro", 450.0, true),
        plan(5, "Starter EU", 150.0, true),
        plan(6, "Archived", 10.0, false),
    ]
}

pub fn auth_service(users: Arc<MemoryUsers>) -> AuthService {
    AuthService::new(users, SECRET, Duration::hours(8)).with_bcrypt_cost(BCRYPT_TEST_COST)
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub users: Arc<MemoryUsers>,
    pub plans: Arc<MemoryPlans>,
    pub proxies: Arc<MemoryProxies>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_users(MemoryUsers::new())
    }

    pub fn with_users(users: MemoryUsers) -> Self {
        let users = Arc::new(users);
        let plans = Arc::new(MemoryPlans::new(default_plans()));
        let proxies = Arc::new(MemoryProxies::new(3));
        let state = AppState::new(auth_service(users.clone()), plans.clone(), proxies.clone());
        let router = proxyshop_backend::app(state.clone());
        Self { router, state, users, plans, proxies }
    }

    pub fn token_for(&self, user: &User) -> String {
        self.state.auth.create_session_token(user).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}
