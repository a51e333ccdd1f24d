//! Per-collection locks
//!
//! Every reload-mutate-write span holds the lock of each collection it
//! touches. Locks are always taken in the order inventory → menu → orders,
//! which is enforced here by [`StoreLocks::acquire`].

use parking_lot::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct StoreLocks {
    inventory: Mutex<()>,
    menu: Mutex<()>,
    orders: Mutex<()>,
}

/// Held locks, released together on drop
#[must_use = "collections are unlocked as soon as the guard is dropped"]
pub struct CollectionGuard<'a> {
    _inventory: Option<MutexGuard<'a, ()>>,
    _menu: Option<MutexGuard<'a, ()>>,
    _orders: Option<MutexGuard<'a, ()>>,
}

impl StoreLocks {
    fn acquire(&self, inventory: bool, menu: bool, orders: bool) -> CollectionGuard<'_> {
        let inventory = inventory.then(|| self.inventory.lock());
        let menu = menu.then(|| self.menu.lock());
        let orders = orders.then(|| self.orders.lock());
        CollectionGuard {
            _inventory: inventory,
            _menu: menu,
            _orders: orders,
        }
    }

    pub fn inventory(&self) -> CollectionGuard<'_> {
        self.acquire(true, false, false)
    }

    pub fn menu(&self) -> CollectionGuard<'_> {
        self.acquire(false, true, false)
    }

    pub fn orders(&self) -> CollectionGuard<'_> {
        self.acquire(false, false, true)
    }

    pub fn inventory_and_menu(&self) -> CollectionGuard<'_> {
        self.acquire(true, true, false)
    }

    pub fn menu_and_orders(&self) -> CollectionGuard<'_> {
        self.acquire(false, true, true)
    }

    pub fn all(&self) -> CollectionGuard<'_> {
        self.acquire(true, true, true)
    }
}
