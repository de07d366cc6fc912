use std::env;
use std::time::Duration;

use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use super::env_or;
use crate::core::{AppError, Result};

/// MySQL record store settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    /// Connections kept open while idle
    pub pool_size: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Configuration("DATABASE_URL not set".to_string()))?;

        Ok(Self {
            url,
            pool_size: env_or("DATABASE_POOL_SIZE", "5")?,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", "20")?,
            acquire_timeout_secs: env_or("DATABASE_ACQUIRE_TIMEOUT_SECS", "30")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.url.starts_with("mysql://") {
            return Err(AppError::Configuration(
                "DATABASE_URL must be a mysql:// URL".to_string(),
            ));
        }

        if self.max_connections == 0 || self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "Invalid pool bounds: pool size {} with at most {} connections",
                self.pool_size, self.max_connections
            )));
        }

        Ok(())
    }

    fn pool_options(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .test_before_acquire(true)
    }

    /// Open the pool; fails fast when the server is unreachable
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        self.pool_options()
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| AppError::Configuration(format!("Migration failed: {}", e)))
    }
}
