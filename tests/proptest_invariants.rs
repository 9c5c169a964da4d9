//! Property-based invariant tests
//!
//! 1. Resolution never fails and prefers the most specific table
//! 2. The locale store only ever holds a supported locale
//! 3. The carousel index stays within bounds under any interaction
//! 4. A swipe moves at most one step, and only past the threshold
//! 5. Scroll targets are never negative and respect the margin

use std::sync::Arc;

use chat_heritage::config::{CarouselConfig, ScrollConfig};
use chat_heritage::i18n::{Catalog, Locale, LocaleStore, LocaleTable};
use chat_heritage::navigation::{
    Arrival, HeadlessPage, ScrollContext, ScrollCoordinator, Section,
};
use chat_heritage::ui::StepCarousel;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn locale_strategy() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|parts| parts.join("."))
}

#[derive(Debug, Clone)]
enum Interaction {
    Next,
    Prev,
    GoTo(usize),
    Swipe { start: f64, end: Option<f64> },
}

fn interaction_strategy() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        Just(Interaction::Next),
        Just(Interaction::Prev),
        (0usize..10).prop_map(Interaction::GoTo),
        (0.0f64..400.0, prop::option::of(0.0f64..400.0))
            .prop_map(|(start, end)| Interaction::Swipe { start, end }),
    ]
}

fn context_strategy() -> impl Strategy<Value = ScrollContext> {
    prop_oneof![
        Just(ScrollContext::InPage),
        Just(ScrollContext::Arriving(Arrival::AlreadyMounted)),
        Just(ScrollContext::Arriving(Arrival::FreshNavigation)),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Resolution
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_returns_key_when_no_table_has_it(locale in locale_strategy(), key in key_strategy()) {
        let catalog = Catalog::new(Locale::It).with_table(Locale::It, LocaleTable::new());
        prop_assert_eq!(catalog.resolve(locale, &key), key);
    }

    #[test]
    fn resolve_prefers_own_table_over_default(
        locale in locale_strategy(),
        key in key_strategy(),
        own in "[A-Za-z ]{1,12}",
        fallback in "[A-Za-z ]{1,12}",
    ) {
        let default_table = LocaleTable::new().with(&key, fallback.clone());
        let mut catalog = Catalog::new(Locale::It).with_table(Locale::It, default_table);

        if locale != Locale::It {
            prop_assert_eq!(catalog.resolve(locale, &key), fallback);
        }

        let own_table = LocaleTable::new().with(&key, own.clone());
        catalog.insert(locale, own_table);
        prop_assert_eq!(catalog.resolve(locale, &key), own);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Locale store
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn store_holds_last_accepted_locale(codes in prop::collection::vec("[a-zA-Z]{0,3}", 0..20)) {
        let store = LocaleStore::default();
        let mut expected = Locale::It;

        for code in &codes {
            if let Ok(locale) = code.parse::<Locale>() {
                expected = locale;
            }
            store.set_locale(code);
            prop_assert_eq!(store.get_locale(), expected);
        }
    }

    #[test]
    fn store_ignores_codes_that_are_not_exact(locale in locale_strategy(), pad in " {0,2}") {
        let store = LocaleStore::new(Locale::It);
        let lower = locale.code().to_ascii_lowercase();
        let padded = format!("{}{}{}", pad, locale.code(), pad);

        prop_assert!(!store.set_locale(&lower));
        if !pad.is_empty() {
            prop_assert!(!store.set_locale(&padded));
        }
        prop_assert_eq!(store.get_locale(), Locale::It);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3-4. Carousel
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn carousel_index_stays_in_bounds(
        steps in 1usize..8,
        interactions in prop::collection::vec(interaction_strategy(), 0..50),
    ) {
        let config = CarouselConfig { steps, ..CarouselConfig::default() };
        let mut carousel = StepCarousel::new(&config);

        for interaction in interactions {
            let before = carousel.index();
            match interaction {
                Interaction::Next => { carousel.next(); }
                Interaction::Prev => { carousel.prev(); }
                Interaction::GoTo(index) => { carousel.go_to(index); }
                Interaction::Swipe { start, end } => {
                    carousel.touch_start(start);
                    if let Some(end) = end {
                        carousel.touch_move(end);
                    }
                    carousel.touch_end();
                    prop_assert!(carousel.index().abs_diff(before) <= 1);
                    prop_assert_eq!(carousel.gesture().start_x, None);
                }
            }
            prop_assert!(carousel.index() < steps);
            prop_assert_eq!(carousel.translate_percent(), -(carousel.index() as f64) * 100.0);
        }
    }

    #[test]
    fn swipe_moves_only_past_threshold(start in 100.0f64..300.0, distance in -100.0f64..100.0) {
        let mut carousel = StepCarousel::new(&CarouselConfig::default());
        carousel.go_to(1);

        carousel.touch_start(start);
        carousel.touch_move(start - distance);
        carousel.touch_end();

        let expected = if distance > 50.0 {
            2
        } else if distance < -50.0 {
            0
        } else {
            1
        };
        prop_assert_eq!(carousel.index(), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Scroll targets
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_target_is_clamped_and_offset_by_margin(
        document_top in 0.0f64..6000.0,
        scroll_y in 0.0f64..6000.0,
        width in 320.0f64..1920.0,
        context in context_strategy(),
    ) {
        let page = HeadlessPage::new(width, 800.0).with_anchor("faq", document_top);
        page.set_scroll_y(scroll_y);
        let coordinator = ScrollCoordinator::new(Arc::new(page), ScrollConfig::default());

        let target = coordinator.target_offset(Section::Faq, context).unwrap();
        let margin = coordinator.margin(context);

        prop_assert!(target >= 0.0);
        prop_assert!((target - (document_top - margin).max(0.0)).abs() < 1e-6);
    }
}
