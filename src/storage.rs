//! Browser Persistence Adapter
//!
//! `StoragePort` over `window.localStorage`. This is the only place the
//! frontend touches the real browser storage; everything above it goes
//! through the port so the stores stay testable off-browser.

use crm_core::domain::{CrmError, CrmResult};
use crm_core::store::StoragePort;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn backend(&self) -> CrmResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| CrmError::Storage("localStorage is not available".to_string()))
    }
}

impl StoragePort for BrowserStorage {
    fn load(&self, key: &str) -> CrmResult<Option<String>> {
        self.backend()?
            .get_item(key)
            .map_err(|_| CrmError::Storage(format!("failed to read '{}'", key)))
    }

    fn save(&self, key: &str, value: &str) -> CrmResult<()> {
        self.backend()?
            .set_item(key, value)
            .map_err(|_| CrmError::Storage(format!("failed to write '{}'", key)))
    }

    fn remove(&self, key: &str) -> CrmResult<()> {
        self.backend()?
            .remove_item(key)
            .map_err(|_| CrmError::Storage(format!("failed to remove '{}'", key)))
    }
}
