use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::{User, UserRole};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per RFC 7519.
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
    pub username: String,
}

pub fn sign_token(user: &User, secret: &str, ttl: Duration) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + ttl;
    let claims = Claims {
        sub: user.id.to_string(),
        role: user.role,
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
        username: user.username.clone(),
    };
    encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256)
    )
    .map(|d| d.claims)
}
