//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every system-generated order id carries
pub const ORDER_ID_PREFIX: &str = "order";

/// Order lifecycle state
///
/// Persisted as a free-form string (`Order::status`) so that records written
/// by other tools keep loading; this enum is the interpreted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Open,
    Closed,
}

impl OrderStatus {
    /// Case-insensitive parse used for every state check
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("open") {
            Some(Self::Open)
        } else if value.eq_ignore_ascii_case("closed") {
            Some(Self::Closed)
        } else {
            None
        }
    }

    /// Exact-case parse accepted on explicit modification ("Open" / "Closed")
    pub fn parse_explicit(value: &str) -> Option<Self> {
        match value {
            "Open" => Some(Self::Open),
            "Closed" => Some(Self::Closed),
            _ => None,
        }
    }

    /// Stored form written by the service
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item reference
    pub product_id: String,
    pub quantity: i32,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

impl Order {
    /// Interpreted status, `None` when the stored string is neither open nor closed
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.status)
    }

    pub fn is_open(&self) -> bool {
        self.status() == Some(OrderStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        self.status() == Some(OrderStatus::Closed)
    }
}

/// Create order payload
///
/// Id, status and timestamp are always assigned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Update order payload
///
/// Absent (or empty) fields keep the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}
