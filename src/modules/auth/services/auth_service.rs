use std::sync::Arc;

use chrono::Utc;

use crate::core::{AppError, CrudEntityService, EntityService, Result};
use crate::modules::auth::models::auth::normalize_email;
use crate::modules::auth::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::modules::auth::services::password::{hash_password, verify_password};
use crate::modules::auth::services::token::TokenIssuer;
use crate::modules::users::models::User;
use crate::modules::users::repositories::UserRepository;

pub const TOKEN_TYPE: &str = "Bearer";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub type UserEntityService = EntityService<User, dyn UserRepository>;

/// Registration and login
pub struct AuthService {
    users: UserEntityService,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self {
            users: EntityService::new(repository),
            tokens,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        request.validate()?;
        let email = normalize_email(&request.email)?;

        if self.users.repository().find_by_email(&email).await?.is_some() {
            return Err(AppError::duplicate(format!("User '{}' already exists", email)));
        }

        let user = User {
            id: None,
            email,
            password_hash: hash_password(&request.password)?,
            name: request.name.trim().to_string(),
            role: request.role.unwrap_or_default(),
            created_at: Utc::now(),
        };
        let saved = self.users.save(user).await?;

        tracing::info!(user_id = ?saved.id, role = %saved.role, "User registered");
        Ok(self.respond(saved))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        let Ok(email) = normalize_email(&request.email) else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let Some(user) = self.users.repository().find_by_email(&email).await? else {
            tracing::warn!("Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !verify_password(&request.password, &user.password_hash)? {
            tracing::warn!(user_id = ?user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        tracing::info!(user_id = ?user.id, "User logged in");
        Ok(self.respond(user))
    }

    fn respond(&self, user: User) -> AuthResponse {
        let token = self.tokens.issue(&user);
        AuthResponse {
            access_token: token.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in_seconds: token.expires_in_seconds,
            user: user.into(),
        }
    }
}
