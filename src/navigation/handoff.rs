//! Cross-page scroll handoff
//!
//! When a header link targets a home section from another route, the section
//! id is parked in session storage, the router navigates home, and the home
//! page consumes it once on mount.

use std::sync::Arc;

use tracing::{debug, warn};

use super::section::Section;
use crate::config::SessionConfig;
use crate::state::SessionStore;

/// Pending scroll target carried across a route transition
#[derive(Clone)]
pub struct NavigationHandoff {
    storage: Arc<dyn SessionStore>,
    key: String,
}

impl NavigationHandoff {
    pub fn new(storage: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            storage,
            key: config.scroll_target_key.clone(),
        }
    }

    /// Session storage key holding the pending section
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Park a section before navigating away; replaces any pending one
    pub fn request_scroll(&self, section: Section) {
        debug!(section = section.id(), key = %self.key, "Scroll target handed off");
        self.storage.set(&self.key, section.id());
    }

    /// Whether a target is waiting, without consuming it
    pub fn has_pending(&self) -> bool {
        self.storage.get(&self.key).is_some()
    }

    /// Take the pending section, clearing it
    ///
    /// Values that are not a known section are cleared and dropped.
    pub fn consume_pending_scroll(&self) -> Option<Section> {
        let raw = self.storage.take(&self.key)?;
        match raw.parse::<Section>() {
            Ok(section) => {
                debug!(section = section.id(), "Pending scroll target consumed");
                Some(section)
            }
            Err(_) => {
                warn!(value = %raw, key = %self.key, "Dropping unknown pending scroll target");
                None
            }
        }
    }
}

impl std::fmt::Debug for NavigationHandoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationHandoff")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemorySessionStore;

    fn handoff() -> (MemorySessionStore, NavigationHandoff) {
        let storage = MemorySessionStore::new();
        let handoff = NavigationHandoff::new(Arc::new(storage.clone()), &SessionConfig::default());
        (storage, handoff)
    }

    #[test]
    fn test_consumed_exactly_once() {
        let (_, handoff) = handoff();
        handoff.request_scroll(Section::Faq);
        assert!(handoff.has_pending());
        assert_eq!(handoff.consume_pending_scroll(), Some(Section::Faq));
        assert_eq!(handoff.consume_pending_scroll(), None);
        assert!(!handoff.has_pending());
    }

    #[test]
    fn test_last_write_wins() {
        let (storage, handoff) = handoff();
        handoff.request_scroll(Section::Faq);
        handoff.request_scroll(Section::Percorsi);
        assert_eq!(storage.get("scrollToSection"), Some("percorsi".to_string()));
        assert_eq!(handoff.consume_pending_scroll(), Some(Section::Percorsi));
    }

    #[test]
    fn test_unknown_value_is_cleared() {
        let (storage, handoff) = handoff();
        storage.set("scrollToSection", "contatti");
        assert_eq!(handoff.consume_pending_scroll(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_other_session_keys_untouched() {
        let (storage, handoff) = handoff();
        storage.set("cookieBanner", "dismissed");
        handoff.request_scroll(Section::Inizia);
        handoff.consume_pending_scroll();
        assert_eq!(storage.get("cookieBanner"), Some("dismissed".to_string()));
    }
}
