use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Every data row was stored
    Completed,
    /// Some rows were skipped; see `rejected_row_numbers`
    CompletedWithRejections,
}

/// Outcome of a CSV inventory import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub status: ImportStatus,
    pub accepted_count: usize,
    /// 1-based physical line numbers (the header is line 1)
    pub rejected_row_numbers: Vec<u64>,
}

impl ImportResult {
    pub fn new(accepted_count: usize, rejected_row_numbers: Vec<u64>) -> Self {
        let status = if rejected_row_numbers.is_empty() {
            ImportStatus::Completed
        } else {
            ImportStatus::CompletedWithRejections
        };

        Self {
            status,
            accepted_count,
            rejected_row_numbers,
        }
    }
}
