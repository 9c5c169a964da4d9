//! Header UI state
//!
//! Tracks the scrolled style of the fixed header and the open state of the
//! mobile menu and the language selector.

use crate::i18n::{Locale, LocaleStore};

/// State of the fixed site header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
    language_menu_open: bool,
    scrolled_threshold: f64,
}

impl HeaderState {
    /// `scrolled_threshold` is the scroll offset past which the header
    /// switches to its compact style
    pub fn new(scrolled_threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            language_menu_open: false,
            scrolled_threshold,
        }
    }

    /// Update from a window scroll event. Returns whether the style changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scrolled_threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    /// Pick a language from the selector and close it
    ///
    /// Unknown codes leave the locale unchanged but still close the selector.
    pub fn select_language(&mut self, store: &LocaleStore, code: &str) -> Locale {
        store.set_locale(code);
        self.language_menu_open = false;
        store.get_locale()
    }
}

/// One entry of the language selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub locale: Locale,
    pub name: &'static str,
    pub flag_url: &'static str,
    pub selected: bool,
}

/// Entries of the language selector with the current one marked
pub fn language_options(current: Locale) -> Vec<LanguageOption> {
    Locale::ALL
        .into_iter()
        .map(|locale| LanguageOption {
            locale,
            name: locale.name(),
            flag_url: locale.flag_url(),
            selected: locale == current,
        })
        .collect()
}
