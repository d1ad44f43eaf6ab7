//! In-Memory Storage
//!
//! HashMap-backed `StoragePort` double for tests and host-side use, with
//! switchable failure modes to exercise storage-unavailable paths.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::{CrmError, CrmResult};

use super::traits::StoragePort;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a document, e.g. a corrupt payload for fallback tests
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Make subsequent `load` calls fail with `CrmError::Storage`
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent `save`/`remove` calls fail with `CrmError::Storage`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw document access for assertions
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> CrmResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(CrmError::Storage("storage unavailable".to_string()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> CrmResult<()> {
        if self.fail_writes.get() {
            return Err(CrmError::Storage("storage unavailable".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CrmResult<()> {
        if self.fail_writes.get() {
            return Err(CrmError::Storage("storage unavailable".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
