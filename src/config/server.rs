use serde::Deserialize;

use super::env_or;
use crate::core::{AppError, Result};

const MAX_WORKERS: usize = 1024;

/// Server configuration for HTTP server
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: default_workers(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let workers: usize = env_or("SERVER_WORKERS", "0")?;

        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("SERVER_PORT", "8080")?,
            workers: if workers == 0 { default_workers() } else { workers },
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::Configuration("SERVER_HOST is empty".to_string()));
        }
        if self.workers > MAX_WORKERS {
            return Err(AppError::Configuration(format!(
                "SERVER_WORKERS must be at most {}",
                MAX_WORKERS
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// 2x cores for an I/O-bound workload
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        * 2
}
