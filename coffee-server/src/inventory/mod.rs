//! Inventory - ingredient stock
//!
//! - [`InventoryCache`] - validated, id-indexed view of the collection for one operation
//! - [`DeductionPlan`] - aggregated per-ingredient requirement, checked then applied
//! - [`InventoryService`] - locked CRUD and deduction entry points

mod cache;
mod deduction;
mod service;

pub use cache::{InventoryCache, validate_item};
pub use deduction::DeductionPlan;
pub use service::InventoryService;
