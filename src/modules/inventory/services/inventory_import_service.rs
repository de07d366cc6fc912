use std::io::Read;
use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::inventory::models::ImportResult;
use crate::modules::inventory::services::csv_processing_service::{
    CsvProcessingService, UploadHint,
};
use crate::modules::stock::models::StockLevel;
use crate::modules::stock::repositories::StockLevelRepository;

/// Parses inventory uploads and upserts the rows as stock levels
pub struct InventoryImportService {
    parser: Arc<dyn CsvProcessingService>,
    stock: Arc<dyn StockLevelRepository>,
    max_upload_bytes: usize,
}

impl InventoryImportService {
    pub fn new(
        parser: Arc<dyn CsvProcessingService>,
        stock: Arc<dyn StockLevelRepository>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            parser,
            stock,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Fails once `received` bytes are over the upload limit
    pub fn check_upload_size(&self, received: usize) -> Result<()> {
        if received > self.max_upload_bytes {
            return Err(AppError::validation(format!(
                "Upload exceeds the {} byte limit",
                self.max_upload_bytes
            )));
        }
        Ok(())
    }

    /// Import an in-memory upload after checking its size
    pub async fn import_upload(&self, body: &[u8], hint: &UploadHint) -> Result<ImportResult> {
        self.check_upload_size(body.len())?;

        let mut reader = body;
        self.import(&mut reader, hint).await
    }

    /// Parse the whole file, then write its rows as one unit.
    ///
    /// Existing categories are overwritten and later rows for a category win.
    /// Nothing is stored when parsing or any write fails.
    pub async fn import<R: Read>(&self, file: &mut R, hint: &UploadHint) -> Result<ImportResult> {
        let report = self.parser.parse_csv_file(file, hint)?;

        let levels: Vec<StockLevel> = report.rows.into_iter().map(StockLevel::from).collect();
        let counts = if levels.is_empty() {
            Default::default()
        } else {
            self.stock.upsert_all(levels).await?
        };

        let result = ImportResult::new(counts.total(), report.rejected_line_numbers);
        tracing::info!(
            created = counts.created,
            updated = counts.updated,
            rejected = result.rejected_row_numbers.len(),
            filename = ?hint.filename,
            "Inventory import finished"
        );
        Ok(result)
    }
}
