pub mod warehouse_repository;

pub use warehouse_repository::{MySqlWarehouseRepository, WarehouseRepository};
