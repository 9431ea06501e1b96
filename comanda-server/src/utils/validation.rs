//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits are
//! reasonable UX bounds; the document store itself enforces nothing.

use rust_decimal::Decimal;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, dish
pub const MAX_NAME_LEN: usize = 200;

/// Dish descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Image URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a price is strictly positive.
pub fn validate_price(price: Decimal, field: &str) -> Result<(), AppError> {
    if price <= Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{field} must be a positive amount"
        )));
    }
    Ok(())
}
