// Stock level per product category
//
// Keyed by the category name supplied by the caller; the three counters are
// non-negative by construction.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::validation::require_text;
use crate::core::{Entity, Result};

pub const CATEGORY_MAX_LEN: usize = 100;

/// Stock health derived from the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// At or below the minimum
    Critical,
    /// Above the minimum but short of optimal
    LowStock,
    Ok,
}

impl StockStatus {
    pub fn evaluate(current_stock: u32, min_stock: u32, optimal_stock: u32) -> Self {
        if current_stock <= min_stock {
            StockStatus::Critical
        } else if current_stock < optimal_stock {
            StockStatus::LowStock
        } else {
            StockStatus::Ok
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Critical => write!(f, "critical"),
            StockStatus::LowStock => write!(f, "low_stock"),
            StockStatus::Ok => write!(f, "ok"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StockLevel {
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub optimal_stock: u32,
}

impl StockLevel {
    pub fn status(&self) -> StockStatus {
        StockStatus::evaluate(self.current_stock, self.min_stock, self.optimal_stock)
    }
}

impl Entity for StockLevel {
    type Id = String;
    const KIND: &'static str = "Stock level";

    fn id(&self) -> Option<&String> {
        Some(&self.category)
    }

    fn set_id(&mut self, id: String) {
        self.category = id;
    }
}

/// Request payload for POST /api/stock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelCreateRequest {
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub optimal_stock: u32,
}

impl StockLevelCreateRequest {
    pub fn into_stock_level(self) -> Result<StockLevel> {
        Ok(StockLevel {
            category: require_text("Category", &self.category, CATEGORY_MAX_LEN)?,
            current_stock: self.current_stock,
            min_stock: self.min_stock,
            optimal_stock: self.optimal_stock,
        })
    }
}

/// Request payload for PUT /api/stock/{category}; the whole record is replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelUpdateRequest {
    pub current_stock: u32,
    pub min_stock: u32,
    pub optimal_stock: u32,
}

impl StockLevelUpdateRequest {
    pub fn into_stock_level(self, category: String) -> StockLevel {
        StockLevel {
            category,
            current_stock: self.current_stock,
            min_stock: self.min_stock,
            optimal_stock: self.optimal_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelResponse {
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub optimal_stock: u32,
    pub status: StockStatus,
}

impl From<StockLevel> for StockLevelResponse {
    fn from(level: StockLevel) -> Self {
        let status = level.status();
        Self {
            category: level.category,
            current_stock: level.current_stock,
            min_stock: level.min_stock,
            optimal_stock: level.optimal_stock,
            status,
        }
    }
}
