use crate::core::{AppError, Result};

/// Non-blank text no longer than `max` characters; returns the trimmed value
pub fn require_text(field: &str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} is required", field)));
    }
    optional_text(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

pub fn optional_text(field: &str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "{} must not exceed {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(AppError::validation(format!("{} must be positive", field)));
    }
    Ok(())
}
