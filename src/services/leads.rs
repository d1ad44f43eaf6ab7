//! Lead Services
//!
//! One long-lived store per tab; mutations notify subscribers registered
//! through [`subscribe`], which is how the app-wide refresh trigger gets
//! bumped.

use crm_core::domain::{Lead, LeadDraft, LeadPatch};
use crm_core::store::LeadStore;

use crate::storage::BrowserStorage;

use super::delay;

thread_local! {
    static STORE: LeadStore<BrowserStorage> = LeadStore::new(BrowserStorage::new());
}

/// Register a listener for lead mutations (fired after the persist)
pub fn subscribe(listener: impl Fn() + 'static) {
    STORE.with(|store| store.subscribe(listener));
}

/// Get all leads, archived included
pub async fn get_all() -> Result<Vec<Lead>, String> {
    delay(300).await;
    Ok(STORE.with(|store| store.list()))
}

/// Get lead by ID
pub async fn get_by_id(id: u32) -> Result<Lead, String> {
    delay(200).await;
    STORE.with(|store| store.get_by_id(id)).map_err(|e| e.to_string())
}

/// Create new lead
pub async fn create(draft: LeadDraft) -> Result<Lead, String> {
    delay(400).await;
    STORE.with(|store| store.create(draft)).map_err(|e| e.to_string())
}

/// Update lead
pub async fn update(id: u32, patch: LeadPatch) -> Result<Lead, String> {
    delay(350).await;
    STORE.with(|store| store.update(id, patch)).map_err(|e| e.to_string())
}

/// Archive lead (kept in storage, hidden from active views)
pub async fn archive(id: u32) -> Result<Lead, String> {
    delay(350).await;
    STORE.with(|store| store.archive(id)).map_err(|e| e.to_string())
}

/// Delete lead permanently
pub async fn delete(id: u32) -> Result<(), String> {
    delay(250).await;
    STORE.with(|store| store.delete(id)).map_err(|e| e.to_string())
}

/// Duplicate an existing lead under a fresh id
pub async fn duplicate(id: u32) -> Result<Lead, String> {
    delay(400).await;
    STORE.with(|store| store.duplicate(id)).map_err(|e| e.to_string())
}

/// Move a lead to another stage (for drag and drop)
pub async fn change_stage(id: u32, new_stage: String) -> Result<Lead, String> {
    delay(350).await;
    STORE
        .with(|store| store.change_stage(id, &new_stage))
        .map_err(|e| e.to_string())
}
