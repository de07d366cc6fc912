// Inventory CSV ingestion; routes live under the stock scope

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ImportResult, ImportStatus, InventoryCsvRow};
pub use services::{
    CsvInventoryParser, CsvParseReport, CsvProcessingService, InventoryImportService, UploadHint,
};
