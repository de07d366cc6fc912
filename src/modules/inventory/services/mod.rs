pub mod csv_processing_service;
pub mod inventory_import_service;

pub use csv_processing_service::{
    CsvInventoryParser, CsvParseReport, CsvProcessingService, UploadHint, EXPECTED_HEADER,
};
pub use inventory_import_service::InventoryImportService;
