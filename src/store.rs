//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crm_core::domain::{Column, Lead, Reminder, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All leads, archived included (views filter)
    pub leads: Vec<Lead>,
    /// Configured stages, already in display order
    pub columns: Vec<Column>,
    /// All follow-up reminders
    pub reminders: Vec<Reminder>,
    /// Signed-in user; `None` shows the login page
    pub current_user: Option<User>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a lead in the store by ID (after a confirmed mutation)
pub fn store_update_lead(store: &AppStore, updated: Lead) {
    store
        .leads()
        .write()
        .iter_mut()
        .find(|lead| lead.id == updated.id)
        .map(|lead| *lead = updated);
}

/// Append a lead to the store
pub fn store_add_lead(store: &AppStore, lead: Lead) {
    store.leads().write().push(lead);
}

/// Remove a lead from the store by ID
pub fn store_remove_lead(store: &AppStore, lead_id: u32) {
    store.leads().write().retain(|lead| lead.id != lead_id);
}

/// Replace the signed-in user
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}
