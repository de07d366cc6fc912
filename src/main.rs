use actix_cors::Cors;
use actix_web::{http::header, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use warehouse::config::{Config, DatabaseConfig, LogFormat, SecurityConfig, StorageBackend};
use warehouse::middleware::{RateLimiter, RequestId};
use warehouse::AppState;

// RUST_LOG wins over LOG_LEVEL
fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("warehouse={},actix_web=info", level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allowed_header("X-Filename")
        .allowed_header("X-Request-ID")
        .expose_headers(vec!["X-Request-ID"])
        .max_age(3600);

    match &security.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app.log_level, config.app.log_format);
    config.validate().context("Configuration validation failed")?;

    tracing::info!(env = %config.app.env, storage = ?config.storage, "Starting warehouse service");

    let state = match (config.storage, &config.database) {
        (StorageBackend::MySql, Some(database)) => {
            let pool = database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            DatabaseConfig::run_migrations(&pool)
                .await
                .context("Failed to apply migrations")?;
            tracing::info!(
                max_connections = database.max_connections,
                "Database pool initialized"
            );
            AppState::mysql(pool, &config.import, &config.security)
        }
        (StorageBackend::MySql, None) => anyhow::bail!("MySQL storage requires DATABASE_URL"),
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            AppState::in_memory(&config.import, &config.security)
        }
    };

    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)
        .context("Invalid rate limit")?;
    let security = config.security.clone();
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(rate_limiter.clone())
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors(&security))
            .configure(|cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
