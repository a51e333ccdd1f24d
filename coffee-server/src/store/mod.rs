//! Record Store - whole-collection persistence
//!
//! Each collection (inventory, menu, orders) is read and written as one unit.
//! There are no partial updates and no native locking; callers serialize
//! access through [`StoreLocks`].
//!
//! # Backends
//!
//! | Type | Usage |
//! |------|-------|
//! | [`JsonFileStore`] | one JSON array file per collection |
//! | [`MemoryStore`] | tests and embedding, supports fault injection |

pub mod json_file;
pub mod locks;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use shared::error::{AppError, ErrorCode};
use shared::models::{InventoryItem, MenuItem, Order};
use thiserror::Error;

pub use json_file::JsonFileStore;
pub use locks::{CollectionGuard, StoreLocks};
pub use memory::MemoryStore;

/// File name of the inventory collection
pub const INVENTORY_FILE: &str = "inventory.json";
/// File name of the menu collection
pub const MENU_FILE: &str = "menu_items.json";
/// File name of the orders collection
pub const ORDERS_FILE: &str = "orders.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::Io(_) => "io",
            StoreError::Serialization(_) => "serialization",
            StoreError::Unavailable(_) => "unavailable",
        };
        AppError::with_message(ErrorCode::StoreUnavailable, err.to_string()).with_detail("kind", kind)
    }
}

/// Durable storage of one collection
pub trait RecordStore<T>: Send + Sync {
    /// Read the whole collection, empty when the store is new
    fn read(&self) -> StoreResult<Vec<T>>;

    /// Replace the whole collection
    fn write(&self, records: &[T]) -> StoreResult<()>;
}

/// The three collection stores plus the locks that guard them
///
/// Cloning is cheap; every service receives its own clone.
#[derive(Clone)]
pub struct Stores {
    pub inventory: Arc<dyn RecordStore<InventoryItem>>,
    pub menu: Arc<dyn RecordStore<MenuItem>>,
    pub orders: Arc<dyn RecordStore<Order>>,
    pub locks: Arc<StoreLocks>,
}

impl Stores {
    pub fn new(
        inventory: Arc<dyn RecordStore<InventoryItem>>,
        menu: Arc<dyn RecordStore<MenuItem>>,
        orders: Arc<dyn RecordStore<Order>>,
    ) -> Self {
        Self {
            inventory,
            menu,
            orders,
            locks: Arc::new(StoreLocks::default()),
        }
    }

    /// Open (and create when missing) the collection files under `dir`
    pub fn open_dir(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let inventory = JsonFileStore::<InventoryItem>::create(dir.join(INVENTORY_FILE))?;
        let menu = JsonFileStore::<MenuItem>::create(dir.join(MENU_FILE))?;
        let orders = JsonFileStore::<Order>::create(dir.join(ORDERS_FILE))?;

        tracing::info!(dir = %dir.display(), "Collection files ready");

        Ok(Self::new(Arc::new(inventory), Arc::new(menu), Arc::new(orders)))
    }

    /// Empty process-local stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::<InventoryItem>::new()),
            Arc::new(MemoryStore::<MenuItem>::new()),
            Arc::new(MemoryStore::<Order>::new()),
        )
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
