//! Order cache

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Order;

use super::id::next_order_id;
use crate::store::RecordStore;

pub(crate) fn order_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::OrderNotFound, format!("order with ID {id} not found"))
        .with_detail("order_id", id)
}

/// Order collection loaded and validated for the duration of one operation
#[derive(Debug, Clone, Default)]
pub struct OrderCache {
    orders: Vec<Order>,
    index: HashMap<String, usize>,
}

impl OrderCache {
    /// Read all orders; duplicate ids or non-positive quantities fail the load
    pub fn load(store: &dyn RecordStore<Order>) -> AppResult<Self> {
        let orders = store.read()?;
        Self::from_orders(orders)
    }

    pub fn from_orders(orders: Vec<Order>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(orders.len());
        for (pos, order) in orders.iter().enumerate() {
            if order.order_id.trim().is_empty() {
                return Err(AppError::with_message(
                    ErrorCode::OrderConflict,
                    "stored order has an empty ID",
                ));
            }
            if let Some(item) = order.items.iter().find(|item| item.quantity < 1) {
                return Err(AppError::with_message(
                    ErrorCode::OrderConflict,
                    format!(
                        "stored order {} has non-positive quantity for {}",
                        order.order_id, item.product_id
                    ),
                )
                .with_detail("order_id", order.order_id.as_str()));
            }
            if index.insert(order.order_id.clone(), pos).is_some() {
                return Err(AppError::with_message(
                    ErrorCode::OrderConflict,
                    format!("duplicated order ID {}", order.order_id),
                )
                .with_detail("order_id", order.order_id.as_str()));
            }
        }
        Ok(Self { orders, index })
    }

    pub fn save(&self, store: &dyn RecordStore<Order>) -> AppResult<()> {
        store.write(&self.orders)?;
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.index.get(id).map(|&pos| &self.orders[pos])
    }

    pub fn require(&self, id: &str) -> AppResult<&Order> {
        self.get(id).ok_or_else(|| order_not_found(id))
    }

    /// Next free id, see [`next_order_id`]
    pub fn next_id(&self) -> AppResult<String> {
        next_order_id(self.orders.iter().map(|o| o.order_id.as_str()))
    }

    pub fn push(&mut self, order: Order) -> AppResult<()> {
        if self.index.contains_key(&order.order_id) {
            return Err(AppError::with_message(
                ErrorCode::OrderConflict,
                format!("duplicated order ID {}", order.order_id),
            ));
        }
        self.index.insert(order.order_id.clone(), self.orders.len());
        self.orders.push(order);
        Ok(())
    }

    /// Replace the order with the same id, returning the previous one
    pub fn replace(&mut self, order: Order) -> AppResult<Order> {
        let &pos = self
            .index
            .get(&order.order_id)
            .ok_or_else(|| order_not_found(&order.order_id))?;
        Ok(std::mem::replace(&mut self.orders[pos], order))
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Order> {
        let pos = self.index.remove(id).ok_or_else(|| order_not_found(id))?;
        let removed = self.orders.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }
}
