//! Inventory Service

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::InventoryItem;

use super::{DeductionPlan, InventoryCache};
use crate::menu::MenuCache;
use crate::store::Stores;
use crate::utils::money::to_decimal;

/// Locked entry points over the inventory collection
///
/// Every call reloads and revalidates the collection, mutates the cache and
/// rewrites the whole collection.
#[derive(Debug, Clone)]
pub struct InventoryService {
    stores: Stores,
}

impl InventoryService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Load and validate the whole collection
    pub fn load_all(&self) -> AppResult<InventoryCache> {
        let _guard = self.stores.locks.inventory();
        InventoryCache::load(self.stores.inventory.as_ref())
    }

    pub fn get_all(&self) -> AppResult<Vec<InventoryItem>> {
        Ok(self.load_all()?.into_items())
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<InventoryItem> {
        self.load_all()?.require(id).cloned()
    }

    pub fn add(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        let _guard = self.stores.locks.inventory();
        let mut cache = InventoryCache::load(self.stores.inventory.as_ref())?;
        cache.insert(item.clone())?;
        cache.save(self.stores.inventory.as_ref())?;

        tracing::info!(ingredient_id = %item.ingredient_id, quantity = item.quantity, "Inventory item added");
        Ok(item)
    }

    /// Remove an ingredient no menu recipe uses
    pub fn delete(&self, id: &str) -> AppResult<InventoryItem> {
        let _guard = self.stores.locks.inventory_and_menu();
        let mut cache = InventoryCache::load(self.stores.inventory.as_ref())?;
        let menu = MenuCache::load(self.stores.menu.as_ref())?;

        cache.require(id)?;
        let products: Vec<&str> = menu
            .using_ingredient(id)
            .map(|item| item.product_id.as_str())
            .collect();
        if !products.is_empty() {
            tracing::warn!(ingredient_id = %id, products = ?products, "Delete rejected: ingredient in use");
            return Err(AppError::with_message(
                ErrorCode::IngredientInUse,
                format!("ingredient ID={id} is used by menu items: {}", products.join(", ")),
            )
            .with_detail("ingredient_id", id)
            .with_detail("product_ids", products));
        }
        let removed = cache.remove(id)?;
        cache.save(self.stores.inventory.as_ref())?;

        tracing::info!(ingredient_id = %id, "Inventory item deleted");
        Ok(removed)
    }

    /// Replace an existing record; an identical record is `NothingToModify`
    pub fn modify(&self, item: InventoryItem) -> AppResult<InventoryItem> {
        let _guard = self.stores.locks.inventory();
        let mut cache = InventoryCache::load(self.stores.inventory.as_ref())?;
        cache.replace(item.clone())?;
        cache.save(self.stores.inventory.as_ref())?;

        tracing::info!(ingredient_id = %item.ingredient_id, "Inventory item modified");
        Ok(item)
    }

    /// Deduct `amount` from one ingredient
    ///
    /// A negative result is `InsufficientStock` and nothing is written.
    pub fn deduct(&self, id: &str, amount: f64) -> AppResult<InventoryItem> {
        if !(amount >= 0.0) || !amount.is_finite() {
            return Err(AppError::validation("deduction amount cannot be negative")
                .with_detail("ingredient_id", id)
                .with_detail("amount", amount));
        }

        let _guard = self.stores.locks.inventory();
        let mut cache = InventoryCache::load(self.stores.inventory.as_ref())?;

        // beyond the Decimal range means beyond any storable stock
        let Ok(required) = to_decimal(amount) else {
            let item = cache.require(id)?;
            tracing::warn!(ingredient_id = %id, amount, "Deduction rejected");
            return Err(AppError::insufficient_stock(format!(
                "not enough {} (required: {amount:.2})",
                item.name
            ))
            .with_detail("ingredient_id", id)
            .with_detail("required", amount)
            .with_detail("available", item.quantity));
        };

        let mut plan = DeductionPlan::new();
        plan.add(id, required)?;
        if let Err(e) = plan.apply(&mut cache) {
            tracing::warn!(ingredient_id = %id, amount, error = %e, "Deduction rejected");
            return Err(e);
        }
        cache.save(self.stores.inventory.as_ref())?;

        let item = cache.require(id)?.clone();
        tracing::info!(ingredient_id = %id, amount, remaining = item.quantity, "Inventory deducted");
        Ok(item)
    }
}
