use serde::Deserialize;
use std::str::FromStr;

use super::env_or;
use crate::core::{AppError, Result};

/// What happens to a data row that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvStrictness {
    /// First malformed row aborts the whole file
    #[default]
    FailFast,
    /// Malformed rows are dropped and reported by line number
    SkipInvalid,
}

impl FromStr for CsvStrictness {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" | "strict" => Ok(CsvStrictness::FailFast),
            "skip_invalid" | "lenient" => Ok(CsvStrictness::SkipInvalid),
            other => Err(format!("Invalid CSV strictness: {}", other)),
        }
    }
}

/// CSV ingestion settings
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub delimiter: u8,
    pub strictness: CsvStrictness,
    pub max_upload_bytes: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            strictness: CsvStrictness::FailFast,
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl ImportConfig {
    pub fn from_env() -> Result<Self> {
        let delimiter = std::env::var("IMPORT_CSV_DELIMITER").unwrap_or_else(|_| ",".to_string());

        Ok(Self {
            delimiter: parse_delimiter(&delimiter)?,
            strictness: env_or("IMPORT_STRICTNESS", "fail_fast")?,
            max_upload_bytes: env_or("IMPORT_MAX_UPLOAD_BYTES", "5242880")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(AppError::Configuration(
                "Import upload limit must be greater than 0".to_string(),
            ));
        }
        if self.delimiter == b'"' || self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(AppError::Configuration(
                "CSV delimiter cannot be a quote or line break".to_string(),
            ));
        }
        Ok(())
    }
}

/// Accepts a single ASCII character, or `tab` / `\t`
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(AppError::Configuration(format!(
            "Invalid IMPORT_CSV_DELIMITER: {:?}",
            raw
        ))),
    }
}
