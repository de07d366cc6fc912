use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

/// Record store behind the running service, as seen by the readiness probe
#[derive(Clone)]
pub enum StorageProbe {
    MySql(MySqlPool),
    Memory,
}

impl StorageProbe {
    pub fn mysql(pool: MySqlPool) -> Self {
        Self::MySql(pool)
    }

    pub fn memory() -> Self {
        Self::Memory
    }

    fn name(&self) -> &'static str {
        match self {
            Self::MySql(_) => "mysql",
            Self::Memory => "memory",
        }
    }

    async fn is_reachable(&self) -> bool {
        match self {
            Self::MySql(pool) => match sqlx::query("SELECT 1").execute(pool).await {
                Ok(_) => true,
                Err(e) => {
                    tracing::error!(error = %e, "Record store readiness check failed");
                    false
                }
            },
            Self::Memory => true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub storage: String,
    pub timestamp: String,
}

/// GET /health
///
/// Never touches the record store, so it answers even while MySQL is down.
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(LivenessResponse {
        status: "up".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready
pub async fn readiness(probe: web::Data<StorageProbe>) -> impl Responder {
    let ready = probe.is_reachable().await;
    let response = ReadinessResponse {
        ready,
        storage: probe.name().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(liveness))
        .route("/ready", web::get().to(readiness));
}
