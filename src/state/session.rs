//! Session-scoped storage
//!
//! The browser's session storage is reached through the [`SessionStore`]
//! trait so the navigation handoff can be driven without a real browser.
//! Values live only as long as the page session; nothing is persisted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::trace;

/// Key/value storage that lives for one browsing session
pub trait SessionStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str);

    /// Remove a value; removing an absent key is a no-op
    fn remove(&self, key: &str);

    /// Read a value and remove it in one step
    fn take(&self, key: &str) -> Option<String> {
        let value = self.get(key);
        if value.is_some() {
            self.remove(key);
        }
        value
    }
}

/// In-memory session storage
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry, as when the session ends
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        trace!(key = key, value = value, "Session value stored");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn take(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("scrollToSection"), None);

        store.set("scrollToSection", "faq");
        assert_eq!(store.get("scrollToSection"), Some("faq".to_string()));

        store.set("scrollToSection", "percorsi");
        assert_eq!(store.get("scrollToSection"), Some("percorsi".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("scrollToSection");
        assert!(store.is_empty());
        store.remove("scrollToSection");
    }

    #[test]
    fn test_take_clears_value() {
        let store = MemorySessionStore::new();
        store.set("k", "v");
        assert_eq!(store.take("k"), Some("v".to_string()));
        assert_eq!(store.take("k"), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set("k", "v");
        assert_eq!(other.get("k"), Some("v".to_string()));
        other.clear();
        assert!(store.is_empty());
    }
}
