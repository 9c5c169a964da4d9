//! Locale resolution and store behaviour
//!
//! Exercises the catalog, the shared locale store and the bundled
//! translation files together.

mod helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chat_heritage::config::I18nConfig;
use chat_heritage::i18n::{Locale, LocaleStore, TranslationLoader, Translator};
use chat_heritage::navigation::{Route, Section};
use chat_heritage::ui::{
    faq_items, faq_keys, language_options, missing_required_keys, HeaderState, STICKY_CTA_KEY,
};
use helpers::*;

fn bundled_config() -> I18nConfig {
    I18nConfig {
        default_locale: Locale::It,
        translations_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/translations").to_string(),
    }
}

#[test]
fn test_resolution_falls_back_to_default_then_key() {
    init_test_env();
    let catalog = sample_catalog();

    assert_eq!(catalog.resolve(Locale::En, "nav.percorsi"), "Tours");
    assert_eq!(catalog.resolve(Locale::En, "cta.stickyButton"), "Inizia la chat");
    assert_eq!(catalog.resolve(Locale::Zh, "hero.title"), "Venezia in chat");
    assert_eq!(catalog.resolve(Locale::De, "hero.missing"), "hero.missing");
    assert_eq!(catalog.resolve(Locale::It, ""), "");
}

#[test]
fn test_branch_key_is_not_a_translation() {
    let catalog = sample_catalog();
    assert_eq!(catalog.resolve(Locale::En, "nav"), "nav");
    assert_eq!(catalog.resolve(Locale::En, "nav.percorsi.extra"), "nav.percorsi.extra");
}

#[test]
fn test_translator_follows_store() {
    init_test_env();
    let store = LocaleStore::default();
    let translator = Translator::new(Arc::new(sample_catalog()), store.clone());

    assert_eq!(translator.t("nav.percorsi"), "Percorsi");
    assert!(store.set_locale("DE"));
    assert_eq!(translator.locale(), Locale::De);
    assert_eq!(translator.t("nav.percorsi"), "Touren");
    assert_eq!(translator.t("hero.title"), "Venezia in chat");
}

#[test]
fn test_unknown_code_leaves_locale_and_skips_subscribers() {
    let store = LocaleStore::new(Locale::En);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    store.on_change(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(!store.set_locale("PT"));
    assert!(!store.set_locale(""));
    assert!(!store.set_locale("it"));
    assert!(!store.set_locale("en"));
    assert!(!store.set_locale(" DE "));
    assert_eq!(store.get_locale(), Locale::En);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_subscribers_see_each_change_in_order() {
    let store = LocaleStore::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let subscription = store.on_change(move |locale| sink.lock().unwrap().push(locale));

    store.set_locale("EN");
    store.set_locale("EN");
    store.set_locale("ru");
    store.set_locale("RU");
    assert!(store.unsubscribe(subscription));
    store.set_locale("ZH");

    assert_eq!(*seen.lock().unwrap(), vec![Locale::En, Locale::Ru]);
    assert_eq!(store.get_locale(), Locale::Zh);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_language_selector_updates_store() {
    let store = LocaleStore::default();
    let mut header = HeaderState::new(50.0);

    header.toggle_language_menu();
    assert_eq!(header.select_language(&store, "FR"), Locale::Fr);
    assert!(!header.is_language_menu_open());

    header.toggle_language_menu();
    assert_eq!(header.select_language(&store, "XX"), Locale::Fr);
    assert!(!header.is_language_menu_open());

    let options = language_options(store.get_locale());
    assert_eq!(options.len(), Locale::ALL.len());
    assert_eq!(options.iter().filter(|option| option.selected).count(), 1);
}

#[tokio::test]
async fn test_bundled_translations_load() {
    init_test_env();
    let catalog = TranslationLoader::new(&bundled_config()).load().await.unwrap();

    assert_eq!(catalog.loaded_locales(), Locale::ALL.to_vec());
    assert_eq!(catalog.resolve(Locale::It, "nav.percorsi"), "Percorsi");
    assert_eq!(catalog.resolve(Locale::En, "nav.percorsi"), "Tours");
    assert_eq!(catalog.resolve(Locale::De, "faq.q1"), catalog.resolve(Locale::It, "faq.q1"));
}

#[tokio::test]
async fn test_bundled_translations_coverage() {
    let catalog = TranslationLoader::new(&bundled_config()).load().await.unwrap();
    let report = catalog.coverage();

    assert_eq!(report.default_locale, Locale::It);
    for coverage in &report.locales {
        match coverage.locale {
            Locale::It | Locale::En => assert!(coverage.missing.is_empty(), "{}", coverage.locale),
            _ => {
                assert!(!coverage.missing.is_empty());
                assert!(coverage.percent(report.total_keys) < 100.0);
                assert!(!coverage.missing.iter().any(|key| key.starts_with("nav.")));
            }
        }
    }
}

#[tokio::test]
async fn test_faq_items_in_every_locale() {
    let catalog = Arc::new(TranslationLoader::new(&bundled_config()).load().await.unwrap());
    let store = LocaleStore::default();
    let translator = Translator::new(catalog, store.clone());

    for locale in Locale::ALL {
        store.set(locale);
        let items = faq_items(&translator);
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|item| !item.question.starts_with("faq.")));
    }
}

#[tokio::test]
async fn test_default_table_defines_every_rendered_key() {
    let catalog = TranslationLoader::new(&bundled_config()).load().await.unwrap();

    for section in Section::ALL {
        assert!(catalog.contains(Locale::It, section.label_key()), "{}", section.label_key());
    }
    for key in Route::ALL.into_iter().filter_map(Route::label_key) {
        assert!(catalog.contains(Locale::It, key), "{}", key);
    }
    for n in 1..=5 {
        let (question, answer) = faq_keys(n);
        assert!(catalog.contains(Locale::It, &question), "{}", question);
        assert!(catalog.contains(Locale::It, &answer), "{}", answer);
    }
    assert!(catalog.contains(Locale::It, STICKY_CTA_KEY));
    assert_eq!(missing_required_keys(&catalog, Locale::It), Vec::<String>::new());
    assert_eq!(missing_required_keys(&catalog, Locale::En), Vec::<String>::new());
}
