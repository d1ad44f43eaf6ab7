//! Store Layer - Core Traits
//!
//! Defines the abstract interface for durable key-value persistence.
//! Implementations can use browser localStorage, in-memory maps, etc.
//!
//! The port is synchronous: the backing stores are. Simulated latency is
//! the service layer's concern, not the port's.

use crate::domain::CrmResult;

/// Whole-document key-value persistence port
///
/// Each entity collection lives under one fixed key as a single JSON
/// document. There is no partial update: callers read the whole document,
/// modify it, and write the whole document back.
pub trait StoragePort {
    /// Raw document under `key`, or `None` when absent
    fn load(&self, key: &str) -> CrmResult<Option<String>>;

    /// Full-document rewrite under `key`
    fn save(&self, key: &str, value: &str) -> CrmResult<()>;

    /// Remove the document under `key` (absent key is not an error)
    fn remove(&self, key: &str) -> CrmResult<()>;
}

/// Stores take the port by value; shared handles stay usable through
/// these blanket impls.
impl<S: StoragePort + ?Sized> StoragePort for &S {
    fn load(&self, key: &str) -> CrmResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> CrmResult<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> CrmResult<()> {
        (**self).remove(key)
    }
}

impl<S: StoragePort + ?Sized> StoragePort for std::rc::Rc<S> {
    fn load(&self, key: &str) -> CrmResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> CrmResult<()> {
        (**self).save(key, value)
    }

    fn remove(&self, key: &str) -> CrmResult<()> {
        (**self).remove(key)
    }
}
