// Warehouse model and its transfer objects
//
// A warehouse is keyed by a store-generated numeric id and carries a unique,
// human-readable code used for lookups from the outside.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::validation::{optional_text, require_positive, require_text};
use crate::core::{Entity, Result};

pub const CODE_MAX_LEN: usize = 50;
pub const NAME_MAX_LEN: usize = 255;
pub const LOCATION_MAX_LEN: usize = 255;

/// Represents a physical warehouse and its storage grid dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    /// Generated by the record store on insert
    pub id: Option<i64>,

    /// Unique human-readable code (e.g. "WH-MSK-01")
    pub code: String,

    pub name: String,

    pub zone_max_size: u32,

    pub row_max_size: u32,

    pub shelf_max_size: u32,

    /// Free-form address or description
    pub location: Option<String>,
}

impl Entity for Warehouse {
    type Id = i64;
    const KIND: &'static str = "Warehouse";

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.code)
    }
}

/// Request payload for POST /api/warehouses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseCreateRequest {
    pub code: String,
    pub name: String,
    pub zone_max_size: u32,
    pub row_max_size: u32,
    pub shelf_max_size: u32,
    #[serde(default)]
    pub location: Option<String>,
}

impl WarehouseCreateRequest {
    /// Validate and convert into an unsaved warehouse
    pub fn into_warehouse(self) -> Result<Warehouse> {
        let code = require_text("Code", &self.code, CODE_MAX_LEN)?;
        let name = require_text("Name", &self.name, NAME_MAX_LEN)?;
        require_positive("Zone max size", self.zone_max_size)?;
        require_positive("Row max size", self.row_max_size)?;
        require_positive("Shelf max size", self.shelf_max_size)?;
        if let Some(location) = &self.location {
            optional_text("Location", location, LOCATION_MAX_LEN)?;
        }

        Ok(Warehouse {
            id: None,
            code,
            name,
            zone_max_size: self.zone_max_size,
            row_max_size: self.row_max_size,
            shelf_max_size: self.shelf_max_size,
            location: self.location,
        })
    }
}

/// Request payload for PUT /api/warehouses/{id}
///
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseUpdateRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub zone_max_size: Option<u32>,
    pub row_max_size: Option<u32>,
    pub shelf_max_size: Option<u32>,
    pub location: Option<String>,
}

impl WarehouseUpdateRequest {
    /// Apply present fields onto `warehouse`, validating each one
    pub fn apply_to(self, mut warehouse: Warehouse) -> Result<Warehouse> {
        if let Some(code) = self.code {
            warehouse.code = require_text("Code", &code, CODE_MAX_LEN)?;
        }
        if let Some(name) = self.name {
            warehouse.name = require_text("Name", &name, NAME_MAX_LEN)?;
        }
        if let Some(zone) = self.zone_max_size {
            require_positive("Zone max size", zone)?;
            warehouse.zone_max_size = zone;
        }
        if let Some(row) = self.row_max_size {
            require_positive("Row max size", row)?;
            warehouse.row_max_size = row;
        }
        if let Some(shelf) = self.shelf_max_size {
            require_positive("Shelf max size", shelf)?;
            warehouse.shelf_max_size = shelf;
        }
        if let Some(location) = self.location {
            optional_text("Location", &location, LOCATION_MAX_LEN)?;
            warehouse.location = Some(location);
        }
        Ok(warehouse)
    }
}

/// Response payload for warehouse endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub zone_max_size: u32,
    pub row_max_size: u32,
    pub shelf_max_size: u32,
    pub location: Option<String>,
}

impl From<Warehouse> for WarehouseResponse {
    fn from(warehouse: Warehouse) -> Self {
        Self {
            id: warehouse.id.unwrap_or_default(),
            code: warehouse.code,
            name: warehouse.name,
            zone_max_size: warehouse.zone_max_size,
            row_max_size: warehouse.row_max_size,
            shelf_max_size: warehouse.shelf_max_size,
            location: warehouse.location,
        }
    }
}
