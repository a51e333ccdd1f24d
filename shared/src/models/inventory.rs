//! Inventory Model

use serde::{Deserialize, Serialize};

/// Ingredient stock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub ingredient_id: String,
    pub name: String,
    /// Amount on hand, expressed in `unit`
    pub quantity: f64,
    pub unit: String,
}
