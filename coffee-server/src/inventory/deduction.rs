//! Deduction plan
//!
//! All requirements of one operation are summed per ingredient, checked
//! against the loaded inventory as a whole, and only then applied. Either
//! every line is deducted or none is.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::MenuItemIngredient;

use super::InventoryCache;
use super::cache::ingredient_not_found;
use crate::utils::money::{checked_add, checked_mul, quantity_to_f64, to_decimal};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeductionPlan {
    /// (ingredient id, required amount), in first-seen order
    lines: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl DeductionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `amount` more of `ingredient_id`
    pub fn add(&mut self, ingredient_id: &str, amount: Decimal) -> AppResult<()> {
        match self.index.get(ingredient_id) {
            Some(&pos) => {
                let total = checked_add(self.lines[pos].1, amount)
                    .map_err(|e| e.with_detail("ingredient_id", ingredient_id))?;
                self.lines[pos].1 = total;
            }
            None => {
                self.index.insert(ingredient_id.to_string(), self.lines.len());
                self.lines.push((ingredient_id.to_string(), amount));
            }
        }
        Ok(())
    }

    /// Require `recipe quantity * multiplier` of every recipe ingredient
    pub fn add_recipe(&mut self, recipe: &[MenuItemIngredient], multiplier: Decimal) -> AppResult<()> {
        for line in recipe {
            let amount = checked_mul(to_decimal(line.quantity)?, multiplier)
                .map_err(|e| e.with_detail("ingredient_id", line.ingredient_id.as_str()))?;
            self.add(&line.ingredient_id, amount)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total required amount of one ingredient (zero when absent)
    pub fn required(&self, ingredient_id: &str) -> Decimal {
        self.index
            .get(ingredient_id)
            .map(|&pos| self.lines[pos].1)
            .unwrap_or_default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.lines.iter().map(|(id, amount)| (id.as_str(), *amount))
    }

    /// Sufficiency check without touching the inventory
    pub fn check(&self, inventory: &InventoryCache) -> AppResult<()> {
        for (id, required) in self.lines() {
            let item = inventory.get(id).ok_or_else(|| ingredient_not_found(id))?;
            if required.is_sign_negative() {
                return Err(AppError::validation(format!(
                    "deduction of {id} cannot be negative"
                ))
                .with_detail("ingredient_id", id));
            }
            let available = to_decimal(item.quantity)?;
            if available < required {
                return Err(AppError::insufficient_stock(format!(
                    "not enough {} (required: {:.2})",
                    item.name,
                    quantity_to_f64(required)
                ))
                .with_detail("ingredient_id", id)
                .with_detail("required", quantity_to_f64(required))
                .with_detail("available", item.quantity));
            }
        }
        Ok(())
    }

    /// Check, then deduct every line
    pub fn apply(&self, inventory: &mut InventoryCache) -> AppResult<()> {
        self.check(inventory)?;
        for (id, required) in self.lines() {
            let current = to_decimal(inventory.require(id)?.quantity)?;
            inventory.set_quantity(id, quantity_to_f64(current - required))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::InventoryItem;

    fn inventory(stock: &[(&str, f64)]) -> InventoryCache {
        InventoryCache::from_items(
            stock
                .iter()
                .map(|(id, quantity)| InventoryItem {
                    ingredient_id: id.to_string(),
                    name: id.to_string(),
                    quantity: *quantity,
                    unit: "g".to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn recipe(lines: &[(&str, f64)]) -> Vec<MenuItemIngredient> {
        lines
            .iter()
            .map(|(id, quantity)| MenuItemIngredient {
                ingredient_id: id.to_string(),
                quantity: *quantity,
            })
            .collect()
    }

    #[test]
    fn test_recipe_lines_aggregate_per_ingredient() {
        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("milk", 200.0), ("beans", 18.0)]), Decimal::from(2)).unwrap();
        plan.add_recipe(&recipe(&[("milk", 50.0)]), Decimal::from(1)).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.required("milk"), Decimal::from(450));
        assert_eq!(plan.required("beans"), Decimal::from(36));
        assert_eq!(plan.required("sugar"), Decimal::ZERO);
    }

    #[test]
    fn test_apply_deducts_every_line() {
        let mut inv = inventory(&[("milk", 1000.0), ("beans", 100.0)]);
        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("milk", 200.0), ("beans", 18.0)]), Decimal::from(3)).unwrap();

        plan.apply(&mut inv).unwrap();

        assert_eq!(inv.require("milk").unwrap().quantity, 400.0);
        assert_eq!(inv.require("beans").unwrap().quantity, 46.0);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut inv = inventory(&[("milk", 1000.0), ("beans", 10.0)]);
        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("milk", 200.0), ("beans", 18.0)]), Decimal::from(1)).unwrap();

        let err = plan.apply(&mut inv).unwrap_err();

        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "not enough beans (required: 18.00)");
        assert_eq!(inv.require("milk").unwrap().quantity, 1000.0);
        assert_eq!(inv.require("beans").unwrap().quantity, 10.0);
    }

    #[test]
    fn test_shared_ingredient_cannot_be_overdrawn_jointly() {
        let inv = inventory(&[("milk", 300.0)]);
        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("milk", 200.0)]), Decimal::from(1)).unwrap();
        plan.add_recipe(&recipe(&[("milk", 150.0)]), Decimal::from(1)).unwrap();

        assert_eq!(plan.check(&inv).unwrap_err().code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_exact_stock_drains_to_zero() {
        let mut inv = inventory(&[("syrup", 0.9)]);
        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("syrup", 0.3)]), Decimal::from(3)).unwrap();

        plan.apply(&mut inv).unwrap();

        assert_eq!(inv.require("syrup").unwrap().quantity, 0.0);
    }

    #[test]
    fn test_missing_ingredient_is_not_found() {
        let inv = inventory(&[("milk", 300.0)]);
        let mut plan = DeductionPlan::new();
        plan.add("oat", Decimal::ONE).unwrap();
        assert_eq!(plan.check(&inv).unwrap_err().code, ErrorCode::IngredientNotFound);
    }

    #[test]
    fn test_recipe_overflow_is_out_of_range() {
        let mut plan = DeductionPlan::new();
        let err = plan
            .add_recipe(&recipe(&[("milk", 7e28)]), Decimal::from(2))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        let mut plan = DeductionPlan::new();
        plan.add_recipe(&recipe(&[("milk", 7e28)]), Decimal::ONE).unwrap();
        let err = plan
            .add_recipe(&recipe(&[("milk", 7e28)]), Decimal::ONE)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_huge_stock_is_compared_exactly() {
        let mut inv = inventory(&[("milk", 7e28)]);
        let mut plan = DeductionPlan::new();
        plan.add("milk", Decimal::ONE).unwrap();
        plan.apply(&mut inv).unwrap();
        assert!(inv.require("milk").unwrap().quantity > 6.9e28);
    }
}
