//! Menu cache

use std::collections::{HashMap, HashSet};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuItem, MenuItemIngredient};

use crate::inventory::InventoryCache;
use crate::store::RecordStore;
use crate::utils::validation::{validate_non_negative, validate_positive, validate_required_text};

/// Field validation of one menu record, recipe included
pub fn validate_item(item: &MenuItem) -> AppResult<()> {
    validate_required_text(&item.product_id, "product ID")?;
    validate_positive(item.price, "price")?;
    validate_required_text(&item.description, "description")?;
    validate_required_text(&item.name, "name")?;
    validate_recipe(&item.ingredients)
}

/// Recipe consistency: at least one line, unique ingredient ids, no negative quantity
pub fn validate_recipe(recipe: &[MenuItemIngredient]) -> AppResult<()> {
    if recipe.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RecipeInvalid,
            "number of ingredients cannot be less than 1",
        ));
    }

    let mut seen = HashSet::with_capacity(recipe.len());
    for line in recipe {
        validate_required_text(&line.ingredient_id, "ingredient ID")?;
        if !seen.insert(line.ingredient_id.as_str()) {
            return Err(
                AppError::with_message(ErrorCode::RecipeInvalid, "duplicated ingredient ID")
                    .with_detail("ingredient_id", line.ingredient_id.as_str()),
            );
        }
        validate_non_negative(line.quantity, "ingredient quantity").map_err(|_| {
            AppError::with_message(
                ErrorCode::RecipeInvalid,
                format!("item with quantity {} is less than 0", line.quantity),
            )
            .with_detail("ingredient_id", line.ingredient_id.as_str())
        })?;
    }
    Ok(())
}

pub(crate) fn product_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ProductNotFound,
        format!("menu item with product ID={id} not found"),
    )
    .with_detail("product_id", id)
}

/// Menu collection loaded and validated for the duration of one operation
#[derive(Debug, Clone, Default)]
pub struct MenuCache {
    items: Vec<MenuItem>,
    index: HashMap<String, usize>,
}

impl MenuCache {
    /// Read the whole menu and validate it; any bad record fails the load
    pub fn load(store: &dyn RecordStore<MenuItem>) -> AppResult<Self> {
        let items = store.read()?;
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<MenuItem>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            validate_item(item).map_err(|e| {
                AppError::with_message(
                    ErrorCode::MenuConflict,
                    format!("stored menu is invalid: {}", e.message),
                )
                .with_detail("product_id", item.product_id.as_str())
            })?;
            if index.insert(item.product_id.clone(), pos).is_some() {
                return Err(AppError::with_message(
                    ErrorCode::MenuConflict,
                    format!("duplicated product ID={} in menu", item.product_id),
                )
                .with_detail("product_id", item.product_id.as_str()));
            }
        }
        Ok(Self { items, index })
    }

    pub fn save(&self, store: &dyn RecordStore<MenuItem>) -> AppResult<()> {
        store.write(&self.items)?;
        Ok(())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn require(&self, id: &str) -> AppResult<&MenuItem> {
        self.get(id).ok_or_else(|| product_not_found(id))
    }

    pub fn insert(&mut self, item: MenuItem) -> AppResult<()> {
        validate_item(&item)?;
        if self.contains(&item.product_id) {
            return Err(AppError::with_message(
                ErrorCode::ProductAlreadyExists,
                format!("menu item with product ID={} already exists", item.product_id),
            )
            .with_detail("product_id", item.product_id.as_str()));
        }
        self.index.insert(item.product_id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Replace the record with the same id, returning the previous one
    ///
    /// Unchanged means id, name, description, price and the full ordered
    /// recipe are all equal.
    pub fn replace(&mut self, item: MenuItem) -> AppResult<MenuItem> {
        let &pos = self
            .index
            .get(&item.product_id)
            .ok_or_else(|| product_not_found(&item.product_id))?;
        validate_item(&item)?;
        if self.items[pos] == item {
            return Err(AppError::nothing_to_modify());
        }
        Ok(std::mem::replace(&mut self.items[pos], item))
    }

    pub fn remove(&mut self, id: &str) -> AppResult<MenuItem> {
        let pos = self.index.remove(id).ok_or_else(|| product_not_found(id))?;
        let removed = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// Menu items whose recipe needs `ingredient_id`
    pub fn using_ingredient<'a>(&'a self, ingredient_id: &'a str) -> impl Iterator<Item = &'a MenuItem> {
        self.items
            .iter()
            .filter(move |item| item.ingredients.iter().any(|line| line.ingredient_id == ingredient_id))
    }
}

/// Every recipe ingredient must exist in the inventory
pub(crate) fn ensure_recipe_in_stock(item: &MenuItem, inventory: &InventoryCache) -> AppResult<()> {
    for line in &item.ingredients {
        inventory.require(&line.ingredient_id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> MenuItem {
        MenuItem {
            product_id: "latte".to_string(),
            name: "Caffe Latte".to_string(),
            description: "Espresso with steamed milk".to_string(),
            price: 3.5,
            ingredients: vec![
                MenuItemIngredient {
                    ingredient_id: "espresso_shot".to_string(),
                    quantity: 1.0,
                },
                MenuItemIngredient {
                    ingredient_id: "milk".to_string(),
                    quantity: 200.0,
                },
            ],
        }
    }

    #[test]
    fn test_valid_item() {
        assert!(validate_item(&latte()).is_ok());
    }

    #[test]
    fn test_empty_recipe_is_invalid() {
        let mut item = latte();
        item.ingredients.clear();
        assert_eq!(validate_item(&item).unwrap_err().code, ErrorCode::RecipeInvalid);
    }

    #[test]
    fn test_duplicate_recipe_line_fails_whole_load() {
        let mut item = latte();
        item.ingredients[1].ingredient_id = "espresso_shot".to_string();
        let err = MenuCache::from_items(vec![item]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuConflict);
        assert!(err.message.contains("duplicated ingredient ID"));
    }

    #[test]
    fn test_negative_recipe_quantity_is_invalid() {
        let mut item = latte();
        item.ingredients[0].quantity = -1.0;
        assert_eq!(validate_recipe(&item.ingredients).unwrap_err().code, ErrorCode::RecipeInvalid);
    }

    #[test]
    fn test_zero_recipe_quantity_is_valid() {
        let mut item = latte();
        item.ingredients[0].quantity = 0.0;
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_non_positive_price_is_invalid() {
        let mut item = latte();
        item.price = 0.0;
        assert_eq!(validate_item(&item).unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_duplicate_product_fails_whole_load() {
        let err = MenuCache::from_items(vec![latte(), latte()]).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuConflict);
    }

    #[test]
    fn test_replace_compares_ordered_recipe() {
        let mut cache = MenuCache::from_items(vec![latte()]).unwrap();
        assert_eq!(cache.replace(latte()).unwrap_err().code, ErrorCode::NothingToModify);

        let mut reordered = latte();
        reordered.ingredients.reverse();
        cache.replace(reordered.clone()).unwrap();
        assert_eq!(cache.require("latte").unwrap(), &reordered);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut cache = MenuCache::default();
        cache.insert(latte()).unwrap();
        assert_eq!(cache.insert(latte()).unwrap_err().code, ErrorCode::ProductAlreadyExists);
        cache.remove("latte").unwrap();
        assert_eq!(cache.require("latte").unwrap_err().code, ErrorCode::ProductNotFound);
    }
}
