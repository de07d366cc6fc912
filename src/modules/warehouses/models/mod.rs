pub mod warehouse;

pub use warehouse::{Warehouse, WarehouseCreateRequest, WarehouseResponse, WarehouseUpdateRequest};
