//! Menu Service

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{InventoryItem, MenuItem};

use super::MenuCache;
use super::cache::ensure_recipe_in_stock;
use crate::inventory::{DeductionPlan, InventoryCache};
use crate::store::Stores;

#[derive(Debug, Clone)]
pub struct MenuService {
    stores: Stores,
}

impl MenuService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub fn load_all(&self) -> AppResult<MenuCache> {
        let _guard = self.stores.locks.menu();
        MenuCache::load(self.stores.menu.as_ref())
    }

    pub fn get_all(&self) -> AppResult<Vec<MenuItem>> {
        Ok(self.load_all()?.into_items())
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<MenuItem> {
        self.load_all()?.require(id).cloned()
    }

    /// Add a menu item whose recipe only references existing ingredients
    pub fn add(&self, item: MenuItem) -> AppResult<MenuItem> {
        let _guard = self.stores.locks.inventory_and_menu();
        let inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let mut menu = MenuCache::load(self.stores.menu.as_ref())?;

        menu.insert(item.clone())?;
        ensure_recipe_in_stock(&item, &inventory)?;
        menu.save(self.stores.menu.as_ref())?;

        tracing::info!(product_id = %item.product_id, price = item.price, "Menu item added");
        Ok(item)
    }

    pub fn delete(&self, id: &str) -> AppResult<MenuItem> {
        let _guard = self.stores.locks.menu();
        let mut menu = MenuCache::load(self.stores.menu.as_ref())?;
        let removed = menu.remove(id)?;
        menu.save(self.stores.menu.as_ref())?;

        tracing::info!(product_id = %id, "Menu item deleted");
        Ok(removed)
    }

    pub fn modify(&self, item: MenuItem) -> AppResult<MenuItem> {
        let _guard = self.stores.locks.inventory_and_menu();
        let inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let mut menu = MenuCache::load(self.stores.menu.as_ref())?;

        menu.replace(item.clone())?;
        ensure_recipe_in_stock(&item, &inventory)?;
        menu.save(self.stores.menu.as_ref())?;

        tracing::info!(product_id = %item.product_id, "Menu item modified");
        Ok(item)
    }

    /// Deduct `recipe quantity * multiplier` of every recipe ingredient
    ///
    /// All deltas are validated before the single inventory write, so either
    /// every ingredient is deducted or none is. Returns the updated records.
    pub fn deduct_by_recipe(&self, product_id: &str, multiplier: i32) -> AppResult<Vec<InventoryItem>> {
        if multiplier < 1 {
            return Err(AppError::validation("multiplier must be positive")
                .with_detail("product_id", product_id)
                .with_detail("multiplier", multiplier));
        }

        let _guard = self.stores.locks.inventory_and_menu();
        let mut inventory = InventoryCache::load(self.stores.inventory.as_ref())?;
        let menu = MenuCache::load(self.stores.menu.as_ref())?;
        let item = menu.require(product_id)?;

        let mut plan = DeductionPlan::new();
        plan.add_recipe(&item.ingredients, Decimal::from(multiplier))?;
        if let Err(e) = plan.apply(&mut inventory) {
            tracing::warn!(product_id = %product_id, multiplier, error = %e, "Recipe deduction rejected");
            return Err(e);
        }
        inventory.save(self.stores.inventory.as_ref())?;

        tracing::info!(product_id = %product_id, multiplier, "Recipe deducted from inventory");
        Ok(plan
            .lines()
            .filter_map(|(id, _)| inventory.get(id).cloned())
            .collect())
    }
}
