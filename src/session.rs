//! Persistence of the authenticated flag across page reloads.

use gloo_storage::{LocalStorage, Storage};

const STORAGE_KEY_AUTH: &str = "isAuthenticated";
const AUTH_FLAG: &str = "true";

/// Holds the single persisted fact of the app: whether the user is
/// logged in. Read once at startup, written on login and logout.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> bool;
    fn persist(&self);
    fn clear(&self);
}

/// Browser localStorage under the `isAuthenticated` key. Any stored
/// value other than `"true"` (or no value at all) reads as logged out.
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn load(&self) -> bool {
        LocalStorage::get::<String>(STORAGE_KEY_AUTH)
            .map(|v| v == AUTH_FLAG)
            .unwrap_or(false)
    }

    fn persist(&self) {
        let _ = LocalStorage::set(STORAGE_KEY_AUTH, AUTH_FLAG);
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_KEY_AUTH);
    }
}

/// In-memory store with the same contract, for tests and headless use.
#[derive(Default)]
pub struct MemorySession {
    value: std::sync::Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an arbitrary raw value, as a stale or foreign writer might.
    pub fn with_raw_value(value: impl Into<String>) -> Self {
        Self {
            value: std::sync::Mutex::new(Some(value.into())),
        }
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> bool {
        self.value
            .lock()
            .map(|v| v.as_deref() == Some(AUTH_FLAG))
            .unwrap_or(false)
    }

    fn persist(&self) {
        if let Ok(mut v) = self.value.lock() {
            *v = Some(AUTH_FLAG.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut v) = self.value.lock() {
            *v = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_round_trip() {
        let store = MemorySession::new();
        assert!(!store.load(), "fresh store starts logged out");

        store.persist();
        assert!(store.load(), "persisted flag reads back authenticated");

        store.clear();
        assert!(!store.load(), "cleared flag reads back logged out");
    }

    #[test]
    fn test_foreign_values_read_as_logged_out() {
        for raw in ["false", "TRUE", "1", "yes", ""] {
            let store = MemorySession::with_raw_value(raw);
            assert!(!store.load(), "{raw:?} must not authenticate");
        }
    }
}
