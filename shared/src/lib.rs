//! Shared types for the hot-coffee service
//!
//! Persisted record models, derived report types, and the unified error
//! system used by the server crate and its HTTP layer.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
