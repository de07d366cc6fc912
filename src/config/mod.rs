use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

pub mod database;
pub mod import;
pub mod server;

pub use database::DatabaseConfig;
pub use import::{CsvStrictness, ImportConfig};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageBackend,
    pub database: Option<DatabaseConfig>,
    pub server: ServerConfig,
    pub import: ImportConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Invalid log format: {}", other)),
        }
    }
}

/// Where entity records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    MySql,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("Invalid storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub token_ttl_seconds: u64,
    pub rate_limit_per_minute: u32,
    pub cors_allowed_origin: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            token_ttl_seconds: 3600,
            rate_limit_per_minute: 1000,
            cors_allowed_origin: None,
        }
    }
}

/// Read `key`, falling back to `default`, and parse it
pub(crate) fn env_or<T: FromStr>(key: &str, default: &str) -> Result<T> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Configuration(format!("Invalid {}", key)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let storage: StorageBackend = env_or("STORAGE_BACKEND", "mysql")?;
        let database = match storage {
            StorageBackend::MySql => Some(DatabaseConfig::from_env()?),
            StorageBackend::Memory => None,
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env_or("LOG_FORMAT", "pretty")?,
            },
            storage,
            database,
            server: ServerConfig::from_env()?,
            import: ImportConfig::from_env()?,
            security: SecurityConfig {
                token_ttl_seconds: env_or("AUTH_TOKEN_TTL_SECONDS", "3600")?,
                rate_limit_per_minute: env_or("RATE_LIMIT_PER_MINUTE", "1000")?,
                cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match (&self.storage, &self.database) {
            (StorageBackend::MySql, None) => {
                return Err(AppError::Configuration(
                    "MySQL storage requires DATABASE_URL".to_string(),
                ));
            }
            (StorageBackend::MySql, Some(database)) => database.validate()?,
            (StorageBackend::Memory, _) => {}
        }

        if self.security.token_ttl_seconds == 0 {
            return Err(AppError::Configuration(
                "Token TTL must be greater than 0".to_string(),
            ));
        }

        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        self.server.validate()?;
        self.import.validate()?;

        Ok(())
    }
}
