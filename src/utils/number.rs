//! Input parsing for rates and hours typed by the user.

use crate::errors::{AppError, AppResult};

/// Parse a non-negative whole amount (e.g. an hourly rate).
pub fn parse_amount(field: &str, raw: &str) -> AppResult<u64> {
    let s = raw.trim();
    if s.starts_with('-') {
        return Err(AppError::Validation(format!(
            "{field} must not be negative: '{raw}'"
        )));
    }
    s.parse::<u64>()
        .map_err(|_| AppError::Validation(format!("{field} must be a whole number: '{raw}'")))
}

/// Parse a non-negative number of hours. Fractions are truncated toward
/// zero ("7.9" → 7).
pub fn parse_hours(field: &str, raw: &str) -> AppResult<u64> {
    let s = raw.trim();

    if let Ok(h) = s.parse::<u64>() {
        return Ok(h);
    }

    match s.parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 && h < u64::MAX as f64 => Ok(h.trunc() as u64),
        Ok(_) => Err(AppError::Validation(format!(
            "{field} must be a non-negative number: '{raw}'"
        ))),
        Err(_) => Err(AppError::Validation(format!(
            "{field} must be a number: '{raw}'"
        ))),
    }
}

/// Split a `NAME=VALUE` override as given to `--hours` / `--overtime`.
pub fn split_assignment(raw: &str) -> AppResult<(&str, &str)> {
    raw.rsplit_once('=')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| AppError::Validation(format!("expected NAME=HOURS, found '{raw}'")))
}
