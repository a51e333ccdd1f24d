//! Fulfillment Engine - order creation and closure
//!
//! Both operations span the inventory, menu and order collections and hold
//! all three locks for their whole duration.
//!
//! # Closure protocol
//!
//! 1. reload and revalidate all three collections
//! 2. require the order to be open
//! 3. build one [`DeductionPlan`] for every line, check it as a whole
//! 4. write inventory once, then write orders
//! 5. if the orders write fails, write the inventory snapshot back

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderCreate, OrderItem, OrderStatus};

use crate::inventory::{DeductionPlan, InventoryCache};
use crate::menu::MenuCache;
use crate::orders::{OrderCache, validate_customer_name, validate_items};
use crate::store::{RecordStore, Stores};
use crate::utils::time::now_timestamp;

/// Aggregate recipe requirement of a list of order lines
pub fn plan_for_items(items: &[OrderItem], menu: &MenuCache) -> AppResult<DeductionPlan> {
    let mut plan = DeductionPlan::new();
    for item in items {
        let product = menu.require(&item.product_id)?;
        plan.add_recipe(&product.ingredients, Decimal::from(item.quantity))?;
    }
    Ok(plan)
}

#[derive(Debug, Clone)]
pub struct FulfillmentEngine {
    stores: Stores,
}

impl FulfillmentEngine {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Validate and persist a new open order
    ///
    /// Stock is only checked here; nothing is deducted until the order closes.
    pub fn create_order(&self, request: OrderCreate) -> AppResult<Order> {
        let _guard = self.stores.locks.all();
        let inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let mut orders = OrderCache::load(self.stores.orders.as_ref())?;

        validate_customer_name(&request.customer_name)?;
        validate_items(&request.items, &menu)?;
        if let Err(e) = plan_for_items(&request.items, &menu)?.check(&inventory) {
            tracing::warn!(customer = %request.customer_name, error = %e, "Order rejected");
            return Err(e);
        }

        let order = Order {
            order_id: orders.next_id()?,
            customer_name: request.customer_name,
            items: request.items,
            status: OrderStatus::Open.as_str().to_string(),
            created_at: now_timestamp(),
        };
        orders.push(order.clone())?;
        orders.save(self.stores.orders.as_ref())?;

        tracing::info!(order_id = %order.order_id, lines = order.items.len(), "Order created");
        Ok(order)
    }

    /// Close an open order, deducting its full recipe requirement
    pub fn close_order(&self, id: &str) -> AppResult<Order> {
        let _guard = self.stores.locks.all();
        let mut inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let mut orders = OrderCache::load(self.stores.orders.as_ref())?;

        let mut order = orders.require(id)?.clone();
        match order.status() {
            Some(OrderStatus::Open) => {}
            Some(OrderStatus::Closed) => {
                tracing::warn!(order_id = %id, "Close rejected: already closed");
                return Err(AppError::with_message(
                    ErrorCode::OrderAlreadyClosed,
                    "order is already closed",
                )
                .with_detail("order_id", id));
            }
            None => {
                return Err(AppError::with_message(
                    ErrorCode::OrderInvalidStatus,
                    format!("order {id} has unknown status {}", order.status),
                )
                .with_detail("order_id", id));
            }
        }

        validate_customer_name(&order.customer_name)?;
        validate_items(&order.items, &menu)?;

        let snapshot = inventory.items().to_vec();
        let plan = plan_for_items(&order.items, &menu)?;
        if let Err(e) = plan.apply(&mut inventory) {
            tracing::warn!(order_id = %id, error = %e, "Close rejected");
            return Err(e);
        }
        inventory.save(self.stores.inventory.as_ref())?;

        order.status = OrderStatus::Closed.as_str().to_string();
        orders.replace(order.clone())?;
        if let Err(e) = orders.save(self.stores.orders.as_ref()) {
            tracing::warn!(order_id = %id, error = %e, "Order write failed, restoring inventory");
            if let Err(restore) = self.stores.inventory.write(&snapshot) {
                tracing::error!(order_id = %id, error = %restore, "Inventory restore failed");
            }
            return Err(e);
        }

        tracing::info!(order_id = %id, ingredients = plan.len(), "Order closed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use shared::models::{InventoryItem, MenuItem, MenuItemIngredient};
    use std::sync::Arc;

    struct Fixture {
        engine: FulfillmentEngine,
        inventory: Arc<MemoryStore<InventoryItem>>,
        orders: Arc<MemoryStore<Order>>,
    }

    fn stock(id: &str, quantity: f64) -> InventoryItem {
        InventoryItem {
            ingredient_id: id.to_string(),
            name: id.to_string(),
            quantity,
            unit: "g".to_string(),
        }
    }

    fn product(id: &str, recipe: &[(&str, f64)]) -> MenuItem {
        MenuItem {
            product_id: id.to_string(),
            name: id.to_string(),
            description: "coffee".to_string(),
            price: 3.5,
            ingredients: recipe
                .iter()
                .map(|(ingredient_id, quantity)| MenuItemIngredient {
                    ingredient_id: ingredient_id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    fn line(product_id: &str, quantity: i32) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    fn request(items: Vec<OrderItem>) -> OrderCreate {
        OrderCreate {
            customer_name: "Alice".to_string(),
            items,
        }
    }

    fn fixture(inventory: Vec<InventoryItem>, orders: Vec<Order>) -> Fixture {
        let menu = vec![
            product("latte", &[("milk", 200.0), ("beans", 18.0)]),
            product("espresso", &[("beans", 18.0)]),
        ];
        let inventory = Arc::new(MemoryStore::with_records(inventory));
        let orders = Arc::new(MemoryStore::with_records(orders));
        let stores = Stores::new(
            inventory.clone(),
            Arc::new(MemoryStore::with_records(menu)),
            orders.clone(),
        );
        Fixture {
            engine: FulfillmentEngine::new(stores),
            inventory,
            orders,
        }
    }

    #[test]
    fn test_create_assigns_id_status_and_timestamp() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![]);

        let first = f.engine.create_order(request(vec![line("latte", 2)])).unwrap();
        let second = f.engine.create_order(request(vec![line("espresso", 1)])).unwrap();

        assert_eq!(first.order_id, "order1");
        assert_eq!(second.order_id, "order2");
        assert_eq!(first.status, "open");
        assert_eq!(first.created_at.len(), 19);
        assert_eq!(f.orders.records(), vec![first, second]);
        // creation only checks stock
        assert_eq!(f.inventory.write_count(), 0);
    }

    #[test]
    fn test_create_beyond_stock_writes_nothing() {
        let f = fixture(vec![stock("milk", 300.0), stock("beans", 100.0)], vec![]);

        let err = f.engine.create_order(request(vec![line("latte", 2)])).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(f.orders.write_count(), 0);
        assert_eq!(f.inventory.records(), vec![stock("milk", 300.0), stock("beans", 100.0)]);
    }

    #[test]
    fn test_create_checks_aggregate_across_lines() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 30.0)], vec![]);
        let err = f
            .engine
            .create_order(request(vec![line("latte", 1), line("espresso", 1)]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_create_validation_errors() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![]);
        let nameless = OrderCreate {
            customer_name: String::new(),
            items: vec![line("latte", 1)],
        };
        assert_eq!(f.engine.create_order(nameless).unwrap_err().code, ErrorCode::RequiredField);
        assert_eq!(f.engine.create_order(request(vec![])).unwrap_err().code, ErrorCode::OrderEmpty);
        assert_eq!(
            f.engine.create_order(request(vec![line("mocha", 1)])).unwrap_err().code,
            ErrorCode::ProductNotFound
        );
        assert_eq!(f.orders.write_count(), 0);
    }

    #[test]
    fn test_create_with_malformed_stored_id() {
        let odd = Order {
            order_id: "legacy-7".to_string(),
            customer_name: "Zed".to_string(),
            items: vec![line("latte", 1)],
            status: "closed".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![odd]);
        let err = f.engine.create_order(request(vec![line("latte", 1)])).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderIdMalformed);
    }

    #[test]
    fn test_close_deducts_and_marks_closed() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![]);
        let order = f
            .engine
            .create_order(request(vec![line("latte", 2), line("espresso", 1)]))
            .unwrap();

        let closed = f.engine.close_order(&order.order_id).unwrap();

        assert_eq!(closed.status, "closed");
        assert_eq!(f.inventory.records(), vec![stock("milk", 600.0), stock("beans", 46.0)]);
        assert_eq!(f.orders.records()[0].status, "closed");

        let err = f.engine.close_order(&order.order_id).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderAlreadyClosed);
        assert_eq!(err.message, "order is already closed");
        assert_eq!(f.inventory.records(), vec![stock("milk", 600.0), stock("beans", 46.0)]);
    }

    #[test]
    fn test_close_accepts_any_case_open() {
        let stored = Order {
            order_id: "order1".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![line("espresso", 1)],
            status: "Open".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        let f = fixture(vec![stock("milk", 0.0), stock("beans", 18.0)], vec![stored]);
        assert_eq!(f.engine.close_order("order1").unwrap().status, "closed");
        assert_eq!(f.inventory.records()[1].quantity, 0.0);
    }

    #[test]
    fn test_close_insufficient_stock_changes_nothing() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![]);
        let order = f.engine.create_order(request(vec![line("latte", 4)])).unwrap();
        f.inventory
            .write(&[stock("milk", 1000.0), stock("beans", 20.0)])
            .unwrap();

        let err = f.engine.close_order(&order.order_id).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(f.inventory.records(), vec![stock("milk", 1000.0), stock("beans", 20.0)]);
        assert_eq!(f.orders.records()[0].status, "open");
    }

    #[test]
    fn test_close_restores_inventory_when_order_write_fails() {
        let f = fixture(vec![stock("milk", 1000.0), stock("beans", 100.0)], vec![]);
        let order = f.engine.create_order(request(vec![line("latte", 1)])).unwrap();
        f.orders.set_fail_writes(true);

        let err = f.engine.close_order(&order.order_id).unwrap_err();

        assert_eq!(err.code, ErrorCode::StoreUnavailable);
        assert_eq!(f.inventory.records(), vec![stock("milk", 1000.0), stock("beans", 100.0)]);
        assert_eq!(f.orders.records()[0].status, "open");
    }

    #[test]
    fn test_close_unknown_order() {
        let f = fixture(vec![], vec![]);
        assert_eq!(
            f.engine.close_order("order3").unwrap_err().code,
            ErrorCode::OrderNotFound
        );
    }

    #[test]
    fn test_recipe_overflow_is_out_of_range() {
        let inventory = Arc::new(MemoryStore::with_records(vec![stock("milk", 7e28)]));
        let orders = Arc::new(MemoryStore::with_records(vec![Order {
            order_id: "order1".to_string(),
            customer_name: "Alice".to_string(),
            items: vec![line("bucket", 2)],
            status: "open".to_string(),
            created_at: "2024-10-10 12:00:00".to_string(),
        }]));
        let engine = FulfillmentEngine::new(Stores::new(
            inventory.clone(),
            Arc::new(MemoryStore::with_records(vec![product("bucket", &[("milk", 7e28)])])),
            orders.clone(),
        ));

        let err = engine.create_order(request(vec![line("bucket", 2)])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let err = engine.close_order("order1").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(inventory.write_count(), 0);
        assert_eq!(orders.write_count(), 0);

        let menu = MenuCache::from_items(vec![product("bucket", &[("milk", 7e28)])]).unwrap();
        assert_eq!(
            plan_for_items(&[line("bucket", 1), line("bucket", 1)], &menu)
                .unwrap_err()
                .code,
            ErrorCode::ValueOutOfRange
        );
    }
}
