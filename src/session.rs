//! Session Store
//!
//! Persists the single bearer token. Presence of a non-empty token is the
//! only authentication signal the client has.

use std::sync::{Arc, Mutex, MutexGuard};

use gloo_storage::{LocalStorage, Storage};

/// Fixed storage key of the bearer token
pub const TOKEN_KEY: &str = "token";

/// Backend holding the raw token value
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn remove(&self);
}

/// Anything that can accept the outcome of a login or logout.
///
/// Login is the only writer of a token and logout the only one clearing it.
pub trait SessionWriter {
    fn set_token(&self, token: String);
    fn clear_token(&self);
}

/// Browser `localStorage`, survives reloads
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn is_available() -> bool {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some()
    }
}

// The token is kept verbatim, without a JSON wrapper, so other clients on the
// same origin read and write the same value.
impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn store(&self, token: &str) {
        if let Err(e) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
            log::warn!("[SESSION] could not persist token: {:?}", e);
        }
    }

    fn remove(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(TOKEN_KEY) {
            log::warn!("[SESSION] could not remove token: {:?}", e);
        }
    }
}

/// Page-lifetime storage, used when `localStorage` is unavailable
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned slot still holds a valid Option
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn store(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn remove(&self) {
        self.slot().take();
    }
}

/// Token store over a pluggable backend
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn TokenStorage>,
}

impl Session {
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Browser-backed session, or an in-memory one if storage is blocked
    pub fn browser() -> Self {
        if BrowserStorage::is_available() {
            Self::new(BrowserStorage)
        } else {
            log::warn!("[SESSION] localStorage unavailable, session will not survive a reload");
            Self::new(MemoryStorage::default())
        }
    }

    pub fn get(&self) -> Option<String> {
        self.storage.load().filter(|t| !t.is_empty())
    }

    /// Persist `token`; an empty token is the same as logging out
    pub fn set(&self, token: &str) {
        if token.is_empty() {
            self.clear();
        } else {
            self.storage.store(token);
        }
    }

    pub fn clear(&self) {
        self.storage.remove();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl SessionWriter for Session {
    fn set_token(&self, token: String) {
        self.set(&token);
    }

    fn clear_token(&self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let session = Session::new(MemoryStorage::default());
        assert_eq!(session.get(), None);
        assert!(!session.is_authenticated());

        session.set("abc.def.ghi");
        assert_eq!(session.get().as_deref(), Some("abc.def.ghi"));
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn test_token_round_trips_verbatim() {
        let storage = MemoryStorage::default();
        storage.store("abc.def.ghi");
        assert_eq!(storage.load().as_deref(), Some("abc.def.ghi"));

        let session = Session::new(MemoryStorage::default());
        session.set("\"quoted\"");
        assert_eq!(session.get().as_deref(), Some("\"quoted\""));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemoryStorage::default());
        session.set("abc");
        session.set("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = Session::new(MemoryStorage::default());
        let other = session.clone();
        session.set_token("t".to_string());
        assert!(other.is_authenticated());
        other.clear_token();
        assert!(!session.is_authenticated());
    }
}
