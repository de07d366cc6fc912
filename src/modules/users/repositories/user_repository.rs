use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryRepository, Repository, Result};
use crate::modules::users::models::User;

/// Record store for users, with lookup by email
#[async_trait]
pub trait UserRepository: Repository<User, i64> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// MySQL-backed user store
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const SELECT_USER: &str = "SELECT id, email, password_hash, name, role, created_at FROM users";

#[async_trait]
impl Repository<User, i64> for MySqlUserRepository {
    async fn insert(&self, mut user: User) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, name, role, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, format!("User '{}' already exists", user.email)))?;

        if user.id.is_none() {
            user.id = Some(result.last_insert_id() as i64);
        }
        Ok(user)
    }

    async fn replace(&self, id: &i64, mut user: User) -> Result<Option<User>> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ? FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        // created_at is fixed at registration
        sqlx::query("UPDATE users SET email = ?, password_hash = ?, name = ?, role = ? WHERE id = ?")
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .bind(user.role.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_write(e, format!("User '{}' already exists", user.email)))?;

        tx.commit().await?;

        user.id = Some(*id);
        Ok(Some(user))
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!("{} ORDER BY id", SELECT_USER))
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn get_by_id(&self, id: &i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn delete_by_id(&self, id: &i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{} WHERE email = ?", SELECT_USER))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.find_by_natural_key(email).await)
    }
}
