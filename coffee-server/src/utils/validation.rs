//! Input validation helpers
//!
//! Field checks shared by the inventory, menu and order caches. Every helper
//! reports the offending field in the error details.

use shared::error::{AppError, ErrorCode};

use super::money::to_decimal;

/// Amounts must survive the conversion into `Decimal` arithmetic
fn validate_in_range(value: f64, field: &str) -> Result<(), AppError> {
    to_decimal(value)
        .map(|_| ())
        .map_err(|e| e.with_detail("field", field))
}

/// Validate that a required string is non-empty
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} cannot be empty"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that a number is finite and not negative
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    // NaN fails both comparisons
    if !(value >= 0.0) || !value.is_finite() {
        return Err(
            AppError::validation(format!("{field} cannot be negative"))
                .with_detail("field", field)
                .with_detail("value", value),
        );
    }
    validate_in_range(value, field)
}

/// Validate that a number is finite and strictly positive
pub fn validate_positive(value: f64, field: &str) -> Result<(), AppError> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(
            AppError::validation(format!("{field} cannot be negative or zero"))
                .with_detail("field", field)
                .with_detail("value", value),
        );
    }
    validate_in_range(value, field)
}
