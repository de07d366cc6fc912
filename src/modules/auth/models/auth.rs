use serde::{Deserialize, Serialize};

use crate::core::validation::require_text;
use crate::core::{AppError, Result};
use crate::modules::users::models::{Role, UserResponse};

pub const EMAIL_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 255;
pub const PASSWORD_MIN_LEN: usize = 5;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Request payload for POST /api/auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<()> {
        normalize_email(&self.email)?;
        validate_password(&self.password)?;
        require_text("Name", &self.name, NAME_MAX_LEN)?;
        Ok(())
    }
}

/// Request payload for POST /api/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued credentials plus the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in_seconds: u64,
    pub user: UserResponse,
}

/// Trimmed, lower-cased email with a minimal shape check
pub fn normalize_email(raw: &str) -> Result<String> {
    let email = require_text("Email", raw, EMAIL_MAX_LEN)?.to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation(format!("'{}' is not a valid email", raw.trim())));
    }
    Ok(email)
}

pub fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(AppError::validation(format!(
            "Password must be between {} and {} characters",
            PASSWORD_MIN_LEN, PASSWORD_MAX_LEN
        )));
    }
    Ok(())
}
