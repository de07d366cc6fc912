// Warehouses module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Warehouse, WarehouseCreateRequest, WarehouseResponse, WarehouseUpdateRequest};
pub use repositories::{MySqlWarehouseRepository, WarehouseRepository};
pub use services::{WarehouseEntityService, WarehouseService};
