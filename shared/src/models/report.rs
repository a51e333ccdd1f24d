//! Report Models (derived, never persisted)

use serde::{Deserialize, Serialize};

use super::menu::{MenuItem, MenuItemIngredient};

/// Revenue over all closed orders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalSales {
    #[serde(rename = "total_sales")]
    pub amount: f64,
}

/// Menu item together with how many units closed orders sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularItem {
    pub quantity: i64,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ingredients: Vec<MenuItemIngredient>,
}

impl PopularItem {
    pub fn from_menu_item(item: MenuItem, quantity: i64) -> Self {
        Self {
            quantity,
            product_id: item.product_id,
            name: item.name,
            description: item.description,
            price: item.price,
            ingredients: item.ingredients,
        }
    }
}
