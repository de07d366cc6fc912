//! Service graph shared by every worker
//!
//! Built once at startup for the configured storage backend. Each worker's
//! `App` gets the same `Arc`s through [`AppState::configure`].

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::config::{ImportConfig, SecurityConfig};
use crate::core::InMemoryRepository;
use crate::middleware::json_error_handler;
use crate::modules::auth::{AuthService, OpaqueTokenIssuer};
use crate::modules::health::StorageProbe;
use crate::modules::inventory::{CsvInventoryParser, InventoryImportService};
use crate::modules::stock::{MySqlStockLevelRepository, StockLevel, StockLevelRepository, StockService};
use crate::modules::users::{MySqlUserRepository, User, UserRepository};
use crate::modules::warehouses::{MySqlWarehouseRepository, Warehouse, WarehouseRepository, WarehouseService};

/// JSON request bodies are small; CSV uploads have their own limit
const JSON_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub warehouses: Arc<WarehouseService>,
    pub stock: Arc<StockService>,
    pub inventory: Arc<InventoryImportService>,
    pub auth: Arc<AuthService>,
    pub probe: StorageProbe,
}

impl AppState {
    /// Services over MySQL-backed stores
    pub fn mysql(pool: MySqlPool, import: &ImportConfig, security: &SecurityConfig) -> Self {
        Self::build(
            Arc::new(MySqlWarehouseRepository::new(pool.clone())),
            Arc::new(MySqlStockLevelRepository::new(pool.clone())),
            Arc::new(MySqlUserRepository::new(pool.clone())),
            StorageProbe::mysql(pool),
            import,
            security,
        )
    }

    /// Services over process-local stores; state is lost on restart
    pub fn in_memory(import: &ImportConfig, security: &SecurityConfig) -> Self {
        Self::build(
            Arc::new(InMemoryRepository::<Warehouse>::with_generated_ids(|seq| seq as i64)),
            Arc::new(InMemoryRepository::<StockLevel>::new()),
            Arc::new(InMemoryRepository::<User>::with_generated_ids(|seq| seq as i64)),
            StorageProbe::memory(),
            import,
            security,
        )
    }

    fn build(
        warehouses: Arc<dyn WarehouseRepository>,
        stock: Arc<dyn StockLevelRepository>,
        users: Arc<dyn UserRepository>,
        probe: StorageProbe,
        import: &ImportConfig,
        security: &SecurityConfig,
    ) -> Self {
        let inventory = Arc::new(InventoryImportService::new(
            Arc::new(CsvInventoryParser::new(import.clone())),
            stock.clone(),
            import.max_upload_bytes,
        ));
        let stock = Arc::new(StockService::new(stock));
        let auth = Arc::new(AuthService::new(
            users,
            Arc::new(OpaqueTokenIssuer::new(security.token_ttl_seconds)),
        ));

        Self {
            warehouses: Arc::new(WarehouseService::new(warehouses)),
            stock,
            inventory,
            auth,
            probe,
        }
    }

    /// Register shared services, extractor config and routes on an `App`
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.warehouses.clone()))
            .app_data(web::Data::new(self.stock.clone()))
            .app_data(web::Data::new(self.inventory.clone()))
            .app_data(web::Data::new(self.auth.clone()))
            .app_data(web::Data::new(self.probe.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_LIMIT_BYTES)
                    .error_handler(json_error_handler),
            )
            .configure(crate::modules::configure_routes);
    }
}
