//! Aggregation Engine - sales reports
//!
//! Reports replay every stored order against the current menu on each call;
//! nothing is cached between calls.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus, PopularItem, TotalSales};

use crate::menu::MenuCache;
use crate::orders::OrderCache;
use crate::store::Stores;
use crate::utils::money::{checked_add, checked_mul, to_decimal, to_f64};

/// Default size of the popular items report
pub const DEFAULT_TOP_N: usize = 3;

fn no_orders() -> AppError {
    AppError::with_message(ErrorCode::NoOrders, "no orders found")
}

/// `true` for closed orders, `false` for open ones, error otherwise
fn counts_as_sold(order: &Order) -> AppResult<bool> {
    match order.status() {
        Some(OrderStatus::Closed) => Ok(true),
        Some(OrderStatus::Open) => Ok(false),
        None => Err(AppError::with_message(
            ErrorCode::OrderInvalidStatus,
            format!("order {} has unknown status {}", order.order_id, order.status),
        )
        .with_detail("order_id", order.order_id.as_str())
        .with_detail("status", order.status.as_str())),
    }
}

#[derive(Debug, Clone)]
pub struct ReportService {
    stores: Stores,
}

impl ReportService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Revenue of all closed orders at current menu prices
    pub fn total_sales(&self) -> AppResult<TotalSales> {
        let _guard = self.stores.locks.menu_and_orders();
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let orders = OrderCache::load(self.stores.orders.as_ref())?;
        if orders.is_empty() {
            return Err(no_orders());
        }

        let mut total = Decimal::ZERO;
        for order in orders.orders() {
            if !counts_as_sold(order)? {
                continue;
            }
            for item in &order.items {
                let price = menu.require(&item.product_id)?.price;
                let line = checked_mul(to_decimal(price)?, Decimal::from(item.quantity))?;
                total = checked_add(total, line)?;
            }
        }

        tracing::debug!(total = %total, "Total sales computed");
        Ok(TotalSales { amount: to_f64(total) })
    }

    /// The `top_n` best selling menu items of closed orders
    ///
    /// Sorted by quantity sold descending, ties by product id ascending.
    pub fn popular_items(&self, top_n: usize) -> AppResult<Vec<PopularItem>> {
        if top_n == 0 {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                "number of popular items must be at least 1",
            ));
        }

        let _guard = self.stores.locks.menu_and_orders();
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let orders = OrderCache::load(self.stores.orders.as_ref())?;
        if orders.is_empty() {
            return Err(no_orders());
        }

        let mut sold: HashMap<&str, i64> = HashMap::new();
        for order in orders.orders() {
            if !counts_as_sold(order)? {
                continue;
            }
            for item in &order.items {
                if item.quantity < 1 {
                    return Err(AppError::validation(format!(
                        "order {} has non-positive quantity for {}",
                        order.order_id, item.product_id
                    )));
                }
                *sold.entry(item.product_id.as_str()).or_default() += i64::from(item.quantity);
            }
        }

        let mut ranking: Vec<(&str, i64)> = sold.into_iter().collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranking
            .into_iter()
            .take(top_n)
            .map(|(product_id, quantity)| -> AppResult<PopularItem> {
                let item = menu.require(product_id)?.clone();
                Ok(PopularItem::from_menu_item(item, quantity))
            })
            .collect()
    }
}
