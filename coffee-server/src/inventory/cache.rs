//! Inventory cache

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::InventoryItem;

use crate::store::RecordStore;
use crate::utils::validation::{validate_non_negative, validate_required_text};

/// Field validation of one inventory record
pub fn validate_item(item: &InventoryItem) -> AppResult<()> {
    validate_required_text(&item.ingredient_id, "ingredient ID")?;
    validate_required_text(&item.name, "name")?;
    validate_non_negative(item.quantity, "quantity")?;
    validate_required_text(&item.unit, "unit")?;
    Ok(())
}

pub(crate) fn ingredient_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::IngredientNotFound,
        format!("item with ingredient ID={id} not found"),
    )
    .with_detail("ingredient_id", id)
}

/// Inventory collection loaded and validated for the duration of one operation
#[derive(Debug, Clone, Default)]
pub struct InventoryCache {
    items: Vec<InventoryItem>,
    index: HashMap<String, usize>,
}

impl InventoryCache {
    /// Read the whole collection and validate it; any bad record fails the load
    pub fn load(store: &dyn RecordStore<InventoryItem>) -> AppResult<Self> {
        let items = store.read()?;
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<InventoryItem>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            validate_item(item).map_err(|e| {
                AppError::with_message(
                    ErrorCode::InventoryConflict,
                    format!("stored inventory is invalid: {}", e.message),
                )
                .with_detail("ingredient_id", item.ingredient_id.as_str())
            })?;
            if index.insert(item.ingredient_id.clone(), pos).is_some() {
                return Err(AppError::with_message(
                    ErrorCode::InventoryConflict,
                    format!("duplicated ingredient ID={} in inventory", item.ingredient_id),
                )
                .with_detail("ingredient_id", item.ingredient_id.as_str()));
            }
        }
        Ok(Self { items, index })
    }

    /// Replace the whole collection in `store`
    pub fn save(&self, store: &dyn RecordStore<InventoryItem>) -> AppResult<()> {
        store.write(&self.items)?;
        Ok(())
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<InventoryItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Like [`InventoryCache::get`], reporting a missing id as `IngredientNotFound`
    pub fn require(&self, id: &str) -> AppResult<&InventoryItem> {
        self.get(id).ok_or_else(|| ingredient_not_found(id))
    }

    /// Append a new record
    pub fn insert(&mut self, item: InventoryItem) -> AppResult<()> {
        validate_item(&item)?;
        if self.contains(&item.ingredient_id) {
            return Err(AppError::with_message(
                ErrorCode::IngredientAlreadyExists,
                format!("item with ingredient ID={} already exists", item.ingredient_id),
            )
            .with_detail("ingredient_id", item.ingredient_id.as_str()));
        }
        self.index.insert(item.ingredient_id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Replace the record with the same id, returning the previous one
    pub fn replace(&mut self, item: InventoryItem) -> AppResult<InventoryItem> {
        let &pos = self
            .index
            .get(&item.ingredient_id)
            .ok_or_else(|| ingredient_not_found(&item.ingredient_id))?;
        validate_item(&item)?;
        if self.items[pos] == item {
            return Err(AppError::nothing_to_modify());
        }
        Ok(std::mem::replace(&mut self.items[pos], item))
    }

    pub fn remove(&mut self, id: &str) -> AppResult<InventoryItem> {
        let pos = self.index.remove(id).ok_or_else(|| ingredient_not_found(id))?;
        let removed = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Set a new stock level, rejecting a negative result as `InsufficientStock`
    pub(crate) fn set_quantity(&mut self, id: &str, quantity: f64) -> AppResult<()> {
        let &pos = self.index.get(id).ok_or_else(|| ingredient_not_found(id))?;
        let item = &mut self.items[pos];
        if quantity < 0.0 {
            return Err(AppError::insufficient_stock(format!(
                "not enough {} (available: {:.2})",
                item.name, item.quantity
            ))
            .with_detail("ingredient_id", id));
        }
        item.quantity = quantity;
        Ok(())
    }
}
