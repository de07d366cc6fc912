use serde::{Deserialize, Serialize};

use crate::modules::stock::models::StockLevel;

/// One validated data row of an inventory CSV upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCsvRow {
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub optimal_stock: u32,
}

impl From<InventoryCsvRow> for StockLevel {
    fn from(row: InventoryCsvRow) -> Self {
        StockLevel {
            category: row.category,
            current_stock: row.current_stock,
            min_stock: row.min_stock,
            optimal_stock: row.optimal_stock,
        }
    }
}
