//! Menu - products and their recipes
//!
//! - [`MenuCache`] - validated, id-indexed view of the menu for one operation
//! - [`MenuService`] - locked CRUD plus recipe-driven deduction

mod cache;
mod service;

pub use cache::{MenuCache, validate_item, validate_recipe};
pub use service::MenuService;
