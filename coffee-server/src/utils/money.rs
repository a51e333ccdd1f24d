//! Decimal helpers
//!
//! Amounts are stored as `f64` but all arithmetic happens in [`Decimal`].
//! Values outside the `Decimal` range and overflowing results are reported
//! as `ValueOutOfRange`.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

/// Rounding precision for money amounts (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

fn out_of_range(message: String) -> AppError {
    AppError::with_message(ErrorCode::ValueOutOfRange, message)
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> AppResult<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| out_of_range(format!("{value} is out of range")).with_detail("value", value))
}

/// `a * b`, failing instead of overflowing
#[inline]
pub fn checked_mul(a: Decimal, b: Decimal) -> AppResult<Decimal> {
    a.checked_mul(b)
        .ok_or_else(|| out_of_range(format!("{a} * {b} is out of range")))
}

/// `a + b`, failing instead of overflowing
#[inline]
pub fn checked_add(a: Decimal, b: Decimal) -> AppResult<Decimal> {
    a.checked_add(b)
        .ok_or_else(|| out_of_range(format!("{a} + {b} is out of range")))
}

/// Convert Decimal back to f64 for money, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert Decimal back to f64 for stock quantities, without rounding
#[inline]
pub fn quantity_to_f64(value: Decimal) -> f64 {
    value.normalize().to_f64().unwrap_or_default()
}
