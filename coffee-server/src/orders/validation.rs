//! Order content validation against the menu

use std::collections::HashSet;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::OrderItem;

use crate::menu::MenuCache;

pub fn validate_customer_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "customer name cannot be empty",
        )
        .with_detail("field", "customer_name"));
    }
    Ok(())
}

/// Non-empty, positive quantities, no repeated product, every product on the menu
pub fn validate_items(items: &[OrderItem], menu: &MenuCache) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::with_message(ErrorCode::OrderEmpty, "empty order"));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.quantity < 1 {
            return Err(AppError::validation(format!(
                "quantity of {} must be at least 1",
                item.product_id
            ))
            .with_detail("product_id", item.product_id.as_str())
            .with_detail("quantity", item.quantity));
        }
        if !seen.insert(item.product_id.as_str()) {
            return Err(AppError::validation("duplicated products in order")
                .with_detail("product_id", item.product_id.as_str()));
        }
        menu.require(&item.product_id)?;
    }
    Ok(())
}
