//! Internationalization module
//!
//! This module handles the multi-language UI of the site: the supported
//! locales, the nested translation tables with their fallback rules, the
//! loader that reads them from disk, and the page-session locale store.

pub mod catalog;
pub mod loader;
pub mod locale;
pub mod store;

// Re-export commonly used i18n components
pub use catalog::{Catalog, CoverageReport, LocaleCoverage, LocaleTable, TranslationNode};
pub use loader::TranslationLoader;
pub use locale::Locale;
pub use store::{LocaleStore, Subscription, Translator};
