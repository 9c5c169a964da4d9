//! Translation keys rendered by the site chrome
//!
//! The default locale's table must define every one of these; other locales
//! fall back for the ones they lack.

use super::faq::{faq_keys, FAQ_COUNT};
use crate::i18n::{Catalog, Locale};
use crate::navigation::{Route, Section};

/// Label of the sticky mobile call-to-action
pub const STICKY_CTA_KEY: &str = "cta.stickyButton";

/// Every key the header, sections, FAQ and sticky CTA look up
pub fn required_keys() -> Vec<String> {
    let mut keys: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| section.label_key().to_string())
        .collect();
    keys.extend(
        Route::ALL
            .into_iter()
            .filter_map(Route::label_key)
            .map(str::to_string),
    );
    for n in 1..=FAQ_COUNT {
        let (question, answer) = faq_keys(n);
        keys.push(question);
        keys.push(answer);
    }
    keys.push(STICKY_CTA_KEY.to_string());
    keys.sort();
    keys.dedup();
    keys
}

/// Required keys that `locale`'s own table does not define
pub fn missing_required_keys(catalog: &Catalog, locale: Locale) -> Vec<String> {
    required_keys()
        .into_iter()
        .filter(|key| !catalog.contains(locale, key))
        .collect()
}
