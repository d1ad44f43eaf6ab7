//! Mock Authentication
//!
//! Credential check against the bundled user table plus the session
//! marker in durable storage: an opaque token under one key and the
//! signed-in user's public record under another. Presence of both gates
//! access to the board.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::Utc;

use crate::domain::{CrmError, CrmResult, User};
use crate::seed;
use crate::store::StoragePort;

/// Session token key
pub const AUTH_TOKEN_KEY: &str = "crm_auth_token";
/// Signed-in user record key
pub const USER_DATA_KEY: &str = "crm_user_data";

pub struct SessionStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Validate credentials and establish a session
    pub fn login(&self, email: &str, password: &str) -> CrmResult<User> {
        let found = seed::USERS
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or_else(|| CrmError::Validation("Invalid email or password".to_string()))?;

        let user = User {
            id: found.id,
            email: found.email.to_string(),
            name: found.name.to_string(),
            role: found.role.to_string(),
        };

        // Opaque mock token; nothing ever decodes it
        let token = BASE64.encode(format!("{}:{}", user.email, Utc::now().timestamp_millis()));
        self.storage.save(AUTH_TOKEN_KEY, &token)?;
        let record = serde_json::to_string(&user)
            .map_err(|err| CrmError::Storage(err.to_string()))?;
        self.storage.save(USER_DATA_KEY, &record)?;

        log::debug!("session established for {}", user.email);
        Ok(user)
    }

    /// Drop the session marker
    pub fn logout(&self) -> CrmResult<()> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(USER_DATA_KEY)?;
        Ok(())
    }

    /// The signed-in user, when both token and record are present and the
    /// record parses
    pub fn current_user(&self) -> Option<User> {
        let token = self.storage.load(AUTH_TOKEN_KEY).ok().flatten()?;
        if token.is_empty() {
            return None;
        }
        let record = self.storage.load(USER_DATA_KEY).ok().flatten()?;
        serde_json::from_str(&record).ok()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    #[test]
    fn login_round_trip() {
        let sessions = SessionStore::new(MemoryStorage::new());
        assert!(!sessions.is_authenticated());

        let user = sessions
            .login("admin@pipelinepro.com", "admin123")
            .expect("login");
        assert_eq!(user.name, "Admin User");
        assert_eq!(user.role, "Administrator");

        let current = sessions.current_user().expect("session present");
        assert_eq!(current, user);

        sessions.logout().expect("logout");
        assert!(sessions.current_user().is_none());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let sessions = SessionStore::new(MemoryStorage::new());
        let err = sessions
            .login("admin@pipelinepro.com", "nope")
            .unwrap_err();
        assert!(matches!(err, CrmError::Validation(_)));
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn stored_record_never_contains_a_password() {
        let storage = MemoryStorage::new();
        let sessions = SessionStore::new(storage);
        sessions
            .login("user@pipelinepro.com", "user123")
            .expect("login");
        // SessionStore owns the storage; re-read through the port
        let record = sessions.storage.load(USER_DATA_KEY).unwrap().unwrap();
        assert!(!record.contains("user123"));
        assert!(record.contains("user@pipelinepro.com"));
    }
}
