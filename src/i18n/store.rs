//! Current locale of the page session
//!
//! One [`LocaleStore`] exists per page session. It starts on the default
//! locale, changes only through [`LocaleStore::set_locale`], and is never
//! persisted. Subscribers are invoked synchronously from `set_locale`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::debug;

use super::catalog::Catalog;
use super::locale::Locale;
use crate::utils::logging::log_locale_change;

type Subscriber = Arc<dyn Fn(Locale) + Send + Sync>;

/// Handle returned by [`LocaleStore::on_change`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

struct StoreInner {
    current: RwLock<Locale>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_id: AtomicU64,
}

/// Shared current-locale state with change notification
#[derive(Clone)]
pub struct LocaleStore {
    inner: Arc<StoreInner>,
}

impl LocaleStore {
    /// Create a store starting at `initial`
    pub fn new(initial: Locale) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                current: RwLock::new(initial),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn get_locale(&self) -> Locale {
        *self
            .inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Select a locale by code
    ///
    /// Unknown codes are ignored. Returns whether the locale changed.
    pub fn set_locale(&self, code: &str) -> bool {
        match code.parse::<Locale>() {
            Ok(locale) => self.set(locale),
            Err(_) => {
                debug!(code = code, "Ignoring unsupported locale selection");
                false
            }
        }
    }

    /// Select a locale, notifying subscribers if it differs from the current one
    pub fn set(&self, locale: Locale) -> bool {
        let previous = {
            let mut current = self
                .inner
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == locale {
                return false;
            }
            std::mem::replace(&mut *current, locale)
        };

        log_locale_change(previous, locale);

        // Snapshot so subscribers may (un)subscribe while being notified
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();

        for subscriber in subscribers {
            subscriber(locale);
        }
        true
    }

    /// Register a callback run after every successful locale change
    pub fn on_change<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn(Locale) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(subscriber)));
        Subscription(id)
    }

    /// Remove a subscriber. Returns false if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != subscription.0);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.get_locale())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Resolves keys against the store's current locale
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<Catalog>,
    store: LocaleStore,
}

impl Translator {
    pub fn new(catalog: Arc<Catalog>, store: LocaleStore) -> Self {
        Self { catalog, store }
    }

    /// Translate a dotted key in the current locale
    pub fn t(&self, key: &str) -> String {
        self.catalog.resolve(self.store.get_locale(), key)
    }

    pub fn locale(&self) -> Locale {
        self.store.get_locale()
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
