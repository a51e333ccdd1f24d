//! Unified error codes for the hot-coffee service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Inventory errors
//! - 2xxx: Menu errors
//! - 3xxx: Order errors
//! - 4xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that clients can match on
/// a stable number instead of a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// The proposed update leaves the record unchanged
    NothingToModify = 9,
    /// Request body has an unsupported content type
    UnsupportedContentType = 10,
    /// No route for this method/path
    MethodNotAllowed = 11,

    // ==================== 1xxx: Inventory ====================
    /// Ingredient not found
    IngredientNotFound = 1001,
    /// Ingredient id already taken
    IngredientAlreadyExists = 1002,
    /// Deduction would drive stock negative
    InsufficientStock = 1003,
    /// Stored inventory contains a duplicate or invalid record
    InventoryConflict = 1004,
    /// Ingredient is still referenced by a menu recipe
    IngredientInUse = 1005,

    // ==================== 2xxx: Menu ====================
    /// Menu item not found
    ProductNotFound = 2001,
    /// Product id already taken
    ProductAlreadyExists = 2002,
    /// Recipe has duplicate or negative lines
    RecipeInvalid = 2003,
    /// Stored menu contains a duplicate or invalid record
    MenuConflict = 2004,

    // ==================== 3xxx: Order ====================
    /// Order not found
    OrderNotFound = 3001,
    /// Order has already been closed
    OrderAlreadyClosed = 3002,
    /// Order has no items
    OrderEmpty = 3003,
    /// Order status is not one of open/closed
    OrderInvalidStatus = 3004,
    /// Stored order id does not have the `order<N>` shape
    OrderIdMalformed = 3005,
    /// Stored orders contain a duplicate or invalid record
    OrderConflict = 3006,
    /// Attempt to change an immutable order field
    OrderImmutableField = 3007,

    // ==================== 4xxx: Report ====================
    /// No orders recorded yet
    NoOrders = 4001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Record store could not be read or written
    StoreUnavailable = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::NothingToModify => "Nothing to modify",
            ErrorCode::UnsupportedContentType => "Unsupported content type",
            ErrorCode::MethodNotAllowed => "No such method",

            // Inventory
            ErrorCode::IngredientNotFound => "Ingredient not found",
            ErrorCode::IngredientAlreadyExists => "Ingredient already exists",
            ErrorCode::InsufficientStock => "Not enough stock",
            ErrorCode::InventoryConflict => "Inventory was not read",
            ErrorCode::IngredientInUse => "Ingredient is used by a menu item",

            // Menu
            ErrorCode::ProductNotFound => "Menu item not found",
            ErrorCode::ProductAlreadyExists => "Menu item already exists",
            ErrorCode::RecipeInvalid => "Recipe is invalid",
            ErrorCode::MenuConflict => "Menu was not read",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderAlreadyClosed => "Order is already closed",
            ErrorCode::OrderEmpty => "Order is empty",
            ErrorCode::OrderInvalidStatus => "Order has unknown status",
            ErrorCode::OrderIdMalformed => "Order id is malformed",
            ErrorCode::OrderConflict => "Orders were not read",
            ErrorCode::OrderImmutableField => "Field cannot be modified",

            // Report
            ErrorCode::NoOrders => "No orders recorded",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreUnavailable => "Storage unavailable",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::NothingToModify),
            10 => Ok(ErrorCode::UnsupportedContentType),
            11 => Ok(ErrorCode::MethodNotAllowed),

            // Inventory
            1001 => Ok(ErrorCode::IngredientNotFound),
            1002 => Ok(ErrorCode::IngredientAlreadyExists),
            1003 => Ok(ErrorCode::InsufficientStock),
            1004 => Ok(ErrorCode::InventoryConflict),
            1005 => Ok(ErrorCode::IngredientInUse),

            // Menu
            2001 => Ok(ErrorCode::ProductNotFound),
            2002 => Ok(ErrorCode::ProductAlreadyExists),
            2003 => Ok(ErrorCode::RecipeInvalid),
            2004 => Ok(ErrorCode::MenuConflict),

            // Order
            3001 => Ok(ErrorCode::OrderNotFound),
            3002 => Ok(ErrorCode::OrderAlreadyClosed),
            3003 => Ok(ErrorCode::OrderEmpty),
            3004 => Ok(ErrorCode::OrderInvalidStatus),
            3005 => Ok(ErrorCode::OrderIdMalformed),
            3006 => Ok(ErrorCode::OrderConflict),
            3007 => Ok(ErrorCode::OrderImmutableField),

            // Report
            4001 => Ok(ErrorCode::NoOrders),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreUnavailable),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
