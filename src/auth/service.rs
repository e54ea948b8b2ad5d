// src/auth/service.rs
use std::sync::{Arc, OnceLock};

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::auth::jwt::{sign_token, verify_token};
use crate::auth::validation::{RegisterInput, ValidationError};
use crate::database::{StoreError, UserStore};
use crate::dtos::user::RegisterUserRequest;
use crate::messages;
use crate::models::user::{NewUser, UnknownRole, User, UserRole};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{}", messages::USERNAME_TAKEN)]
    UsernameTaken,
    #[error("{}", messages::INVALID_CREDENTIALS)]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token signing failed: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Role(#[from] UnknownRole),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Issues and checks session tokens and owns the credential records.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    secret: String,
    token_ttl: Duration,
    bcrypt_cost: u32,
    dummy_hash: OnceLock<String>,
}

const DUMMY_PASSWORD: &str = "proxyshop-dummy-password";

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, secret: impl Into<String>, token_ttl: Duration) -> Self {
        Self {
            users,
            secret: secret.into(),
            token_ttl,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            dummy_hash: OnceLock::new(),
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Resolves a bearer token to its user. Any failure, including a store
    /// error during the lookup, yields `None`.
    #[instrument(skip_all)]
    pub async fn verify_session_token(&self, token: &str) -> Option<User> {
        let claims = match verify_token(token, &self.secret) {
            Ok(c) => c,
            Err(e) => {
                debug!(error = %e, "Rejected session token");
                return None;
            }
        };

        let Ok(user_id) = claims.sub.parse::<i64>() else {
            debug!(sub = %claims.sub, "Session token subject is not a user id");
            return None;
        };

        let record = match self.users.find_by_id(user_id).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                debug!(user_id, "Session token refers to a missing user");
                return None;
            }
            Err(e) => {
                warn!(user_id, error = %e, "User lookup failed during token verification");
                return None;
            }
        };

        // The stored role wins over the one baked into the token.
        match User::try_from(record) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!(user_id, error = %e, "Stored user has an unusable role");
                None
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, AuthError> {
        let input = RegisterInput::try_from(request)?;

        let password_hash = bcrypt::hash(&input.password, self.bcrypt_cost)?;

        let record = self
            .users
            .insert(NewUser {
                username: input.username,
                password_hash,
                full_name: input.full_name,
                role: UserRole::User,
            })
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation(_) => AuthError::UsernameTaken,
                other => AuthError::Store(other),
            })?;

        Ok(User::try_from(record)?)
    }

    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let Some(record) = self.users.find_by_username(username.trim()).await? else {
            // Same bcrypt work as a real check, so unknown usernames are not faster.
            let _ = bcrypt::verify(password, self.dummy_hash());
            return Err(AuthError::InvalidCredentials);
        };

        if !bcrypt::verify(password, &record.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(User::try_from(record)?)
    }

    pub fn create_session_token(&self, user: &User) -> Result<String, AuthError> {
        Ok(sign_token(user, &self.secret, self.token_ttl)?)
    }

    fn dummy_hash(&self) -> &str {
        self.dummy_hash.get_or_init(|| {
            bcrypt::hash(DUMMY_PASSWORD, self.bcrypt_cost).unwrap_or_else(|e| {
                warn!(error = %e, "Could not build dummy password hash");
                String::new()
            })
        })
    }
}
