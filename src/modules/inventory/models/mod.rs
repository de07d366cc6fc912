pub mod import_result;
pub mod inventory_csv_row;

pub use import_result::{ImportResult, ImportStatus};
pub use inventory_csv_row::InventoryCsvRow;
