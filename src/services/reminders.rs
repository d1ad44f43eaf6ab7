//! Reminder Services

use chrono::Local;
use crm_core::domain::{Reminder, ReminderDraft, ReminderPatch};
use crm_core::store::ReminderStore;

use crate::storage::BrowserStorage;

use super::delay;

thread_local! {
    static STORE: ReminderStore<BrowserStorage> = ReminderStore::new(BrowserStorage::new());
}

/// Register a listener for reminder mutations (fired after the persist)
pub fn subscribe(listener: impl Fn() + 'static) {
    STORE.with(|store| store.subscribe(listener));
}

/// Get all reminders
pub async fn get_all() -> Result<Vec<Reminder>, String> {
    delay(200).await;
    Ok(STORE.with(|store| store.list()))
}

/// Get reminders by lead ID
pub async fn get_by_lead(lead_id: u32) -> Result<Vec<Reminder>, String> {
    delay(150).await;
    Ok(STORE.with(|store| store.list_by_lead(lead_id)))
}

/// Get reminder by ID
pub async fn get_by_id(id: u32) -> Result<Reminder, String> {
    delay(150).await;
    STORE.with(|store| store.get_by_id(id)).map_err(|e| e.to_string())
}

/// Create new reminder
pub async fn create(draft: ReminderDraft) -> Result<Reminder, String> {
    delay(300).await;
    STORE.with(|store| store.create(draft)).map_err(|e| e.to_string())
}

/// Update reminder
pub async fn update(id: u32, patch: ReminderPatch) -> Result<Reminder, String> {
    delay(250).await;
    STORE.with(|store| store.update(id, patch)).map_err(|e| e.to_string())
}

/// Delete reminder
pub async fn delete(id: u32) -> Result<(), String> {
    delay(200).await;
    STORE.with(|store| store.delete(id)).map_err(|e| e.to_string())
}

/// Mark reminder as completed
pub async fn mark_completed(id: u32) -> Result<Reminder, String> {
    delay(250).await;
    STORE
        .with(|store| store.mark_completed(id))
        .map_err(|e| e.to_string())
}

/// Not-completed reminders due within the next 7 days
pub async fn get_upcoming() -> Result<Vec<Reminder>, String> {
    delay(150).await;
    let now = Local::now().naive_local();
    Ok(STORE.with(|store| store.upcoming(now)))
}

/// Not-completed reminders already past due
pub async fn get_overdue() -> Result<Vec<Reminder>, String> {
    delay(150).await;
    let now = Local::now().naive_local();
    Ok(STORE.with(|store| store.overdue(now)))
}

/// Clear all reminders
pub async fn clear_all() -> Result<(), String> {
    delay(200).await;
    STORE.with(|store| store.clear_all()).map_err(|e| e.to_string())
}
