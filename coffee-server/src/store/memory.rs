//! In-memory backend with fault injection

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::{RecordStore, StoreError, StoreResult};

pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    /// Snapshot of the stored collection
    pub fn records(&self) -> Vec<T> {
        self.records.lock().clone()
    }

    /// Make every subsequent read fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send> RecordStore<T> for MemoryStore<T> {
    fn read(&self) -> StoreResult<Vec<T>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("read failure injected".into()));
        }
        Ok(self.records.lock().clone())
    }

    fn write(&self, records: &[T]) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("write failure injected".into()));
        }
        *self.records.lock() = records.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_replaces_collection() {
        let store = MemoryStore::with_records(vec![1, 2, 3]);
        store.write(&[4]).unwrap();
        assert_eq!(store.read().unwrap(), vec![4]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_injected_write_failure_keeps_records() {
        let store = MemoryStore::with_records(vec![1]);
        store.set_fail_writes(true);
        assert!(store.write(&[2]).is_err());
        assert_eq!(store.records(), vec![1]);
        assert_eq!(store.write_count(), 0);

        store.set_fail_writes(false);
        store.write(&[2]).unwrap();
        assert_eq!(store.records(), vec![2]);
    }

    #[test]
    fn test_injected_read_failure() {
        let store = MemoryStore::<i32>::new();
        store.set_fail_reads(true);
        assert!(matches!(store.read(), Err(StoreError::Unavailable(_))));
    }
}
