use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "fullName", alias = "full_name")]
    pub full_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by both registration and login.
#[derive(Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
