// Stock levels module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{StockLevel, StockLevelResponse, StockStatus};
pub use repositories::{MySqlStockLevelRepository, StockLevelRepository};
pub use services::{StockEntityService, StockService};
