//! CSV parsing for inventory uploads
//!
//! The header must match [`EXPECTED_HEADER`] column for column (names are
//! compared case-insensitively after trimming). Each data row is trimmed and
//! converted into an [`InventoryCsvRow`]; what happens to a bad row depends on
//! [`CsvStrictness`].

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::{CsvStrictness, ImportConfig};
use crate::core::{AppError, Result};
use crate::modules::inventory::models::InventoryCsvRow;
use crate::modules::stock::models::stock_level::CATEGORY_MAX_LEN;

/// Required columns, in order
pub const EXPECTED_HEADER: [&str; 4] = ["category", "currentStock", "minStock", "optimalStock"];

const ACCEPTED_CONTENT_TYPES: [&str; 5] = [
    "text/csv",
    "text/plain",
    "application/csv",
    "application/vnd.ms-excel",
    "application/octet-stream",
];

/// Client-provided metadata about the uploaded file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadHint {
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl UploadHint {
    pub fn new(filename: Option<String>, content_type: Option<String>) -> Self {
        Self {
            filename,
            content_type,
        }
    }

    /// Reject uploads that are clearly not CSV; absent hints are accepted
    pub fn validate(&self) -> Result<()> {
        if let Some(filename) = &self.filename {
            if !filename.to_ascii_lowercase().ends_with(".csv") {
                return Err(AppError::validation(format!(
                    "Expected a .csv file, got '{}'",
                    filename
                )));
            }
        }

        if let Some(content_type) = &self.content_type {
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            if !ACCEPTED_CONTENT_TYPES.contains(&essence.as_str()) {
                return Err(AppError::validation(format!(
                    "Unsupported content type '{}'",
                    content_type
                )));
            }
        }

        Ok(())
    }
}

/// Parsed rows plus the data lines that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvParseReport {
    pub rows: Vec<InventoryCsvRow>,
    pub rejected_line_numbers: Vec<u64>,
}

/// Converts an uploaded tabular file into inventory rows
pub trait CsvProcessingService: Send + Sync {
    fn parse_csv_file(&self, file: &mut dyn Read, hint: &UploadHint) -> Result<CsvParseReport>;
}

/// `csv`-crate backed parser configured from [`ImportConfig`]
#[derive(Debug, Clone, Default)]
pub struct CsvInventoryParser {
    config: ImportConfig,
}

impl CsvInventoryParser {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn strictness(&self) -> CsvStrictness {
        self.config.strictness
    }
}

impl CsvProcessingService for CsvInventoryParser {
    fn parse_csv_file(&self, file: &mut dyn Read, hint: &UploadHint) -> Result<CsvParseReport> {
        hint.validate()?;

        // Headers are read as a plain record so their position is reported like any row
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.config.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);
        let mut records = reader.records();

        let header = match records.next() {
            None => {
                return Err(AppError::MalformedHeader(format!(
                    "file is empty, expected header '{}'",
                    EXPECTED_HEADER.join(",")
                )))
            }
            Some(Err(err)) => {
                return Err(AppError::MalformedHeader(format!(
                    "header is unreadable: {}",
                    err
                )))
            }
            Some(Ok(header)) => header,
        };
        check_header(&header)?;

        let mut report = CsvParseReport::default();
        for result in records {
            let parsed = result.map_err(map_csv_error).and_then(|record| {
                if is_blank(&record) {
                    return Ok(None);
                }
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                parse_row(&record, line).map(Some)
            });

            match parsed {
                Ok(Some(row)) => report.rows.push(row),
                Ok(None) => {}
                Err(AppError::MalformedRow { line, reason })
                    if self.config.strictness == CsvStrictness::SkipInvalid =>
                {
                    tracing::warn!(line, reason = %reason, "Skipping malformed CSV row");
                    report.rejected_line_numbers.push(line);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::debug!(
            parsed = report.rows.len(),
            rejected = report.rejected_line_numbers.len(),
            filename = ?hint.filename,
            "CSV file parsed"
        );
        Ok(report)
    }
}

fn check_header(header: &StringRecord) -> Result<()> {
    let columns: Vec<&str> = header
        .iter()
        .enumerate()
        .map(|(i, name)| if i == 0 { name.trim_start_matches('\u{feff}') } else { name })
        .collect();

    let matches = columns.len() == EXPECTED_HEADER.len()
        && columns
            .iter()
            .zip(EXPECTED_HEADER.iter())
            .all(|(found, expected)| found.eq_ignore_ascii_case(expected));

    if !matches {
        return Err(AppError::MalformedHeader(format!(
            "expected columns '{}' in this order, found '{}'",
            EXPECTED_HEADER.join(","),
            columns.join(",")
        )));
    }
    Ok(())
}

// Only an empty or whitespace-only line; a row of bare delimiters is malformed
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

fn parse_row(record: &StringRecord, line: u64) -> Result<InventoryCsvRow> {
    if record.len() != EXPECTED_HEADER.len() {
        return Err(AppError::malformed_row(
            line,
            format!(
                "expected {} columns, found {}",
                EXPECTED_HEADER.len(),
                record.len()
            ),
        ));
    }

    let category = &record[0];
    if category.is_empty() {
        return Err(AppError::malformed_row(line, "category is empty"));
    }
    if category.chars().count() > CATEGORY_MAX_LEN {
        return Err(AppError::malformed_row(
            line,
            format!("category exceeds {} characters", CATEGORY_MAX_LEN),
        ));
    }

    Ok(InventoryCsvRow {
        category: category.to_string(),
        current_stock: parse_count(record, 1, line)?,
        min_stock: parse_count(record, 2, line)?,
        optimal_stock: parse_count(record, 3, line)?,
    })
}

fn parse_count(record: &StringRecord, index: usize, line: u64) -> Result<u32> {
    let raw = &record[index];
    let invalid = || {
        AppError::malformed_row(
            line,
            format!(
                "{} must be a non-negative integer, got '{}'",
                EXPECTED_HEADER[index], raw
            ),
        )
    };

    // u32's FromStr also takes a leading '+'
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u32>().map_err(|_| invalid())
}

fn map_csv_error(err: csv::Error) -> AppError {
    let line = err.position().map(|p| p.line()).unwrap_or_default();
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => AppError::Io(io),
        _ => AppError::malformed_row(line, reason),
    }
}
