//! Order id allocation
//!
//! An order id is `order` followed by a positive decimal number without sign
//! or leading zero (`order1`, `order42`). Anything else is malformed.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::ORDER_ID_PREFIX;

fn malformed(id: &str) -> AppError {
    AppError::with_message(ErrorCode::OrderIdMalformed, format!("malformed order ID {id}"))
        .with_detail("order_id", id)
}

/// Numeric suffix of an order id
pub fn parse_order_number(id: &str) -> AppResult<u64> {
    let digits = id.strip_prefix(ORDER_ID_PREFIX).ok_or_else(|| malformed(id))?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(id));
    }
    digits.parse().map_err(|_| malformed(id))
}

pub fn format_order_id(number: u64) -> String {
    format!("{ORDER_ID_PREFIX}{number}")
}

/// `order` + (max suffix + 1), `order1` for an empty collection
pub fn next_order_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> AppResult<String> {
    let mut max = 0u64;
    for id in ids {
        max = max.max(parse_order_number(id)?);
    }
    let next = max
        .checked_add(1)
        .ok_or_else(|| AppError::with_message(ErrorCode::OrderIdMalformed, "order ID space exhausted"))?;
    Ok(format_order_id(next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_order_number("order1").unwrap(), 1);
        assert_eq!(parse_order_number("order42").unwrap(), 42);
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for id in ["", "order", "order0", "order01", "order-1", "order+1", "order1a", "Order1", "ord1", "order١"] {
            let err = parse_order_number(id).unwrap_err();
            assert_eq!(err.code, ErrorCode::OrderIdMalformed, "{id}");
        }
        assert!(parse_order_number("order99999999999999999999999").is_err());
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        assert_eq!(next_order_id([]).unwrap(), "order1");
        assert_eq!(next_order_id(["order1", "order7", "order3"]).unwrap(), "order8");
    }

    #[test]
    fn test_next_id_fails_on_malformed() {
        assert_eq!(
            next_order_id(["order1", "bogus"]).unwrap_err().code,
            ErrorCode::OrderIdMalformed
        );
    }
}
