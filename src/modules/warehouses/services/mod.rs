pub mod warehouse_service;

pub use warehouse_service::{WarehouseEntityService, WarehouseService};
