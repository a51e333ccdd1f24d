//! Data models
//!
//! Persisted records (inventory, menu, orders) and the derived report types.
//! Field names are part of the on-disk format and must not change.

pub mod inventory;
pub mod menu;
pub mod order;
pub mod report;

// Re-exports
pub use inventory::*;
pub use menu::*;
pub use order::*;
pub use report::*;
