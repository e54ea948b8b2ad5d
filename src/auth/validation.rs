// src/auth/validation.rs
use thiserror::Error;

use crate::dtos::user::RegisterUserRequest;
use crate::messages;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 32;
const PASSWORD_MIN: usize = 6;
/// bcrypt only reads this many bytes of input.
const PASSWORD_MAX_BYTES: usize = 72;
const FULL_NAME_MAX: usize = 100;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", messages::USERNAME_LENGTH)]
    UsernameLength,
    #[error("{}", messages::USERNAME_CHARSET)]
    UsernameCharset,
    #[error("{}", messages::PASSWORD_TOO_SHORT)]
    PasswordTooShort,
    #[error("{}", messages::PASSWORD_TOO_LONG)]
    PasswordTooLong,
    #[error("{}", messages::FULL_NAME_REQUIRED)]
    FullNameRequired,
    #[error("{}", messages::FULL_NAME_TOO_LONG)]
    FullNameTooLong,
}

/// Registration data that has passed validation.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

impl TryFrom<RegisterUserRequest> for RegisterInput {
    type Error = ValidationError;

    fn try_from(req: RegisterUserRequest) -> Result<Self, Self::Error> {
        let username = req.username.trim();
        let len = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
            return Err(ValidationError::UsernameLength);
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(ValidationError::UsernameCharset);
        }

        if req.password.chars().count() < PASSWORD_MIN {
            return Err(ValidationError::PasswordTooShort);
        }
        if req.password.len() > PASSWORD_MAX_BYTES {
            return Err(ValidationError::PasswordTooLong);
        }

        let full_name = req.full_name.trim();
        if full_name.is_empty() {
            return Err(ValidationError::FullNameRequired);
        }
        if full_name.chars().count() > FULL_NAME_MAX {
            return Err(ValidationError::FullNameTooLong);
        }

        Ok(Self {
            username: username.to_string(),
            password: req.password,
            full_name: full_name.to_string(),
        })
    }
}
