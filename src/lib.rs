//! Chat Heritage site coordination
//!
//! The client-side coordination layer of the Chat Heritage website: locale
//! resolution with fallback, the page-session locale store, scroll
//! coordination across in-page and cross-page navigation, the sticky CTA
//! visibility stream and the "how it works" step carousel.
//!
//! The host document is reached only through [`navigation::Page`] and
//! [`state::SessionStore`], so everything here runs headless in tests.

pub mod config;
pub mod i18n;
pub mod links;
pub mod navigation;
pub mod state;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{HeritageError, Result};

// Re-export main components for easy access
pub use i18n::{Catalog, Locale, LocaleStore, Translator};
pub use navigation::{NavigationHandoff, ScrollCoordinator, Section, SiteNavigator};
pub use state::{MemorySessionStore, SessionStore};
pub use ui::{StepCarousel, VisibilityObserver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
