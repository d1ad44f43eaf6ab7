//! Auth Services
//!
//! Mock login against the bundled user table. The session check is
//! synchronous (it only reads the session marker), matching how the app
//! gate uses it on mount.

use crm_core::auth::SessionStore;
use crm_core::domain::User;

use crate::storage::BrowserStorage;

use super::delay;

fn sessions() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage::new())
}

/// Validate credentials and establish a session
pub async fn login(email: String, password: String) -> Result<User, String> {
    delay(1000).await;
    sessions().login(&email, &password).map_err(|e| e.to_string())
}

/// Drop the session
pub async fn logout() -> Result<(), String> {
    sessions().logout().map_err(|e| e.to_string())
}

/// The signed-in user, if a session marker is present
pub fn current_user() -> Option<User> {
    sessions().current_user()
}
