//! Orders - customer orders and their lifecycle
//!
//! # 生命周期
//!
//! ```text
//! create ──► open ──close──► closed
//!              │                │
//!              └──── delete ────┘
//! ```
//!
//! Creation and closure span all three collections and live in
//! [`crate::fulfillment`]; this module owns the rest.

mod cache;
pub mod id;
mod service;
mod validation;

pub use cache::OrderCache;
pub use service::OrderService;
pub use validation::{validate_customer_name, validate_items};
