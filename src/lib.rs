//! Warehouse management backend
//!
//! Generic CRUD over warehouses and stock levels, CSV inventory ingestion and
//! account registration/login, served over actix-web with MySQL or in-memory
//! record stores.

pub mod app_state;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app_state::AppState;
pub use modules::inventory;
pub use modules::stock;
pub use modules::warehouses;
