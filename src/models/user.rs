use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "super_admin",
        }
    }

    /// Admins and super admins may run maintenance endpoints.
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown user role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            "super_admin" => Ok(UserRole::SuperAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Row as stored in `users`, including the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user; safe to serialize to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: UserRole,
    pub balance: f64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = UnknownRole;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            role: record.role.parse()?,
            id: record.id,
            username: record.username,
            full_name: record.full_name,
            balance: record.balance,
            created_at: record.created_at,
        })
    }
}

pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
}
