// src/config.rs
use std::net::IpAddr;

use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Process-wide settings, read once at start-up.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub token_ttl: Duration,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub bcrypt_cost: u32,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let host = parse_or(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let ttl_hours = parse_or(&lookup, "TOKEN_TTL_HOURS", 8i64)?;
        if ttl_hours <= 0 {
            return Err(ConfigError::Invalid { key: "TOKEN_TTL_HOURS", value: ttl_hours.to_string() });
        }
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;
        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid { key: "BCRYPT_COST", value: bcrypt_cost.to_string() });
        }

        let cors_allowed_origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
            token_ttl: Duration::hours(ttl_hours),
            db_max_connections,
            run_migrations,
            bcrypt_cost,
            cors_allowed_origins,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        _ => Ok(default),
    }
}
