//! Test helpers
//!
//! Shared setup for the integration tests: tracing initialisation, a sample
//! catalog, and a headless home page wired to a navigator.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use chat_heritage::config::{ScrollConfig, SessionConfig};
use chat_heritage::i18n::{Catalog, Locale, LocaleTable};
use chat_heritage::navigation::{
    HeadlessPage, NavigationHandoff, Route, ScrollCoordinator, SiteNavigator,
};
use chat_heritage::state::MemorySessionStore;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub const DESKTOP_WIDTH: f64 = 1280.0;
pub const MOBILE_WIDTH: f64 = 390.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// Document offsets of the home page sections
pub const HOME_SECTIONS: [(&str, f64); 6] = [
    ("problema", 800.0),
    ("chi-siamo", 1500.0),
    ("come-funziona", 2200.0),
    ("percorsi", 3100.0),
    ("faq", 4300.0),
    ("inizia", 5200.0),
];

/// Document offsets of the about page; it shares no section with home
pub const ABOUT_SECTIONS: [(&str, f64); 2] = [("storia", 600.0), ("team", 1400.0)];

pub fn home_page(width: f64) -> HeadlessPage {
    let page = HeadlessPage::new(width, VIEWPORT_HEIGHT);
    page.replace_anchors(HOME_SECTIONS);
    page
}

pub fn about_page(width: f64) -> HeadlessPage {
    let page = HeadlessPage::new(width, VIEWPORT_HEIGHT);
    page.replace_anchors(ABOUT_SECTIONS);
    page
}

/// A navigator with its page and session storage exposed for inspection
pub struct SiteFixture {
    pub page: HeadlessPage,
    pub session: MemorySessionStore,
    pub navigator: SiteNavigator,
}

impl SiteFixture {
    pub fn new(route: Route, page: HeadlessPage) -> Self {
        init_test_env();

        let session = MemorySessionStore::new();
        let coordinator = ScrollCoordinator::new(Arc::new(page.clone()), ScrollConfig::default());
        let handoff = NavigationHandoff::new(Arc::new(session.clone()), &SessionConfig::default());
        let navigator = SiteNavigator::new(route, coordinator, handoff);

        Self {
            page,
            session,
            navigator,
        }
    }

    pub fn on_home(width: f64) -> Self {
        Self::new(Route::Home, home_page(width))
    }

    pub fn on_about(width: f64) -> Self {
        Self::new(Route::ChiSiamo, about_page(width))
    }

    /// Swap the rendered document for the home page, as the router does
    pub fn render_home(&self) {
        self.page.replace_anchors(HOME_SECTIONS);
    }
}

/// Italian is complete, English lacks one key, German has only navigation
pub fn sample_catalog() -> Catalog {
    let italian = LocaleTable::new()
        .with("nav.percorsi", "Percorsi")
        .with("nav.faq", "FAQ")
        .with("hero.title", "Venezia in chat")
        .with("cta.stickyButton", "Inizia la chat");
    let english = LocaleTable::new()
        .with("nav.percorsi", "Tours")
        .with("nav.faq", "FAQ")
        .with("hero.title", "Venice in a chat");
    let german = LocaleTable::new().with("nav.percorsi", "Touren");

    Catalog::new(Locale::It)
        .with_table(Locale::It, italian)
        .with_table(Locale::En, english)
        .with_table(Locale::De, german)
}
