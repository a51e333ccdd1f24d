//! Order Service - reads, deletion and modification

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus, OrderUpdate};

use super::{OrderCache, validate_customer_name, validate_items};
use crate::fulfillment::plan_for_items;
use crate::inventory::InventoryCache;
use crate::menu::MenuCache;
use crate::store::Stores;

/// Treat `Some("")` like an absent field
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct OrderService {
    stores: Stores,
}

impl OrderService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub fn load_all(&self) -> AppResult<OrderCache> {
        let _guard = self.stores.locks.orders();
        OrderCache::load(self.stores.orders.as_ref())
    }

    /// All orders in collection order (empty when there are none)
    pub fn get_all(&self) -> AppResult<Vec<Order>> {
        Ok(self.load_all()?.into_orders())
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Order> {
        self.load_all()?.require(id).cloned()
    }

    /// Remove an order in either state; closed orders are not restocked
    pub fn delete(&self, id: &str) -> AppResult<Order> {
        let _guard = self.stores.locks.orders();
        let mut orders = OrderCache::load(self.stores.orders.as_ref())?;
        let removed = orders.remove(id)?;
        orders.save(self.stores.orders.as_ref())?;

        tracing::info!(order_id = %id, status = %removed.status, "Order deleted");
        Ok(removed)
    }

    /// Apply a partial update
    ///
    /// Absent fields keep the stored value. `order_id` and `created_at` are
    /// immutable, an explicit status must be exactly "Open" or "Closed" and
    /// may not change the lifecycle state, and items of a closed order are
    /// frozen. New items of an open order must be covered by current stock.
    pub fn modify(&self, id: &str, update: OrderUpdate) -> AppResult<Order> {
        let _guard = self.stores.locks.all();
        let inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let mut orders = OrderCache::load(self.stores.orders.as_ref())?;
        let current = orders.require(id)?.clone();

        if let Some(new_id) = non_empty(update.order_id)
            && new_id != current.order_id
        {
            return Err(AppError::with_message(
                ErrorCode::OrderImmutableField,
                "modifying order ID is not permitted",
            )
            .with_detail("field", "order_id"));
        }
        if let Some(created_at) = non_empty(update.created_at)
            && created_at != current.created_at
        {
            return Err(AppError::with_message(
                ErrorCode::OrderImmutableField,
                "modifying created time is not permitted",
            )
            .with_detail("field", "created_at"));
        }

        let status = match non_empty(update.status) {
            None => current.status.clone(),
            Some(requested) => {
                let wanted = OrderStatus::parse_explicit(&requested).ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::OrderInvalidStatus,
                        "wrong order status (should be \"Closed\" or \"Open\")",
                    )
                    .with_detail("status", requested.as_str())
                })?;
                match (current.status(), wanted) {
                    (Some(now), wanted) if now == wanted => wanted.as_str().to_string(),
                    (_, OrderStatus::Closed) => {
                        return Err(AppError::with_message(
                            ErrorCode::OrderInvalidStatus,
                            "orders can only be closed through the close operation",
                        ));
                    }
                    (_, OrderStatus::Open) => {
                        return Err(AppError::with_message(
                            ErrorCode::OrderInvalidStatus,
                            "closed orders cannot be reopened",
                        ));
                    }
                }
            }
        };

        let customer_name = non_empty(update.customer_name).unwrap_or_else(|| current.customer_name.clone());
        validate_customer_name(&customer_name)?;

        let items = match update.items {
            Some(items) if items != current.items => {
                if current.is_closed() {
                    return Err(AppError::with_message(
                        ErrorCode::OrderAlreadyClosed,
                        "items of a closed order cannot be modified",
                    )
                    .with_detail("order_id", id));
                }
                validate_items(&items, &menu)?;
                plan_for_items(&items, &menu)?.check(&inventory)?;
                items
            }
            _ => current.items.clone(),
        };

        let modified = Order {
            order_id: current.order_id.clone(),
            customer_name,
            items,
            status,
            created_at: current.created_at.clone(),
        };
        if modified == current {
            return Err(AppError::nothing_to_modify());
        }

        orders.replace(modified.clone())?;
        orders.save(self.stores.orders.as_ref())?;

        tracing::info!(order_id = %id, "Order modified");
        Ok(modified)
    }
}
