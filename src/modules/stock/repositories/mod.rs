pub mod stock_level_repository;

pub use stock_level_repository::{MySqlStockLevelRepository, StockLevelRepository};
