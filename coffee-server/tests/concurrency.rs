//! Concurrent writers never lose updates

use std::thread;

use coffee_server::{Config, ServerState, Stores};
use shared::error::ErrorCode;
use shared::models::{InventoryItem, MenuItem, MenuItemIngredient, OrderCreate, OrderItem};

fn state() -> ServerState {
    ServerState::new(Config::with_overrides("data", 8080), Stores::in_memory())
}

fn stock(id: &str, quantity: f64) -> InventoryItem {
    InventoryItem {
        ingredient_id: id.to_string(),
        name: id.to_string(),
        quantity,
        unit: "ml".to_string(),
    }
}

#[test]
fn test_concurrent_adds_keep_every_record() {
    let state = state();

    thread::scope(|s| {
        for i in 0..16 {
            let state = &state;
            s.spawn(move || {
                state.inventory.add(stock(&format!("ingredient{i}"), 1.0)).unwrap();
            });
        }
    });

    assert_eq!(state.inventory.get_all().unwrap().len(), 16);
}

#[test]
fn test_concurrent_closures_deduct_exactly_once_each() {
    let state = state();
    state.inventory.add(stock("milk", 1000.0)).unwrap();
    state
        .menu
        .add(MenuItem {
            product_id: "latte".to_string(),
            name: "Latte".to_string(),
            description: "Milk coffee".to_string(),
            price: 3.0,
            ingredients: vec![MenuItemIngredient {
                ingredient_id: "milk".to_string(),
                quantity: 100.0,
            }],
        })
        .unwrap();

    let ids: Vec<String> = (0..12)
        .map(|n| {
            state
                .fulfillment
                .create_order(OrderCreate {
                    customer_name: format!("customer{n}"),
                    items: vec![OrderItem {
                        product_id: "latte".to_string(),
                        quantity: 1,
                    }],
                })
                .unwrap()
                .order_id
        })
        .collect();

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let state = &state;
                s.spawn(move || state.fulfillment.close_order(id))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let closed = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(closed, 10);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    assert_eq!(state.inventory.get_by_id("milk").unwrap().quantity, 0.0);
    let closed_orders = state
        .orders
        .get_all()
        .unwrap()
        .into_iter()
        .filter(|o| o.is_closed())
        .count();
    assert_eq!(closed_orders, 10);
    assert_eq!(state.reports.total_sales().unwrap().amount, 30.0);
}
