//! Menu Model

use serde::{Deserialize, Serialize};

/// One recipe line: how much of an ingredient a single unit consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemIngredient {
    pub ingredient_id: String,
    pub quantity: f64,
}

/// Menu item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    /// Recipe, in declaration order
    #[serde(default)]
    pub ingredients: Vec<MenuItemIngredient>,
}
