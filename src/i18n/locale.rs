//! Supported locales
//!
//! The site ships a fixed set of display languages. Italian is the default
//! and its table is the reference every other table falls back to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::HeritageError;

/// A display language of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    #[default]
    It,
    En,
    De,
    Fr,
    Es,
    Ru,
    Zh,
}

impl Locale {
    /// Every supported locale, in selector order
    pub const ALL: [Locale; 7] = [
        Locale::It,
        Locale::En,
        Locale::De,
        Locale::Fr,
        Locale::Es,
        Locale::Ru,
        Locale::Zh,
    ];

    /// Upper-case locale code, as shown in the language selector
    pub fn code(self) -> &'static str {
        match self {
            Locale::It => "IT",
            Locale::En => "EN",
            Locale::De => "DE",
            Locale::Fr => "FR",
            Locale::Es => "ES",
            Locale::Ru => "RU",
            Locale::Zh => "ZH",
        }
    }

    /// Native name of the language
    pub fn name(self) -> &'static str {
        match self {
            Locale::It => "Italiano",
            Locale::En => "English",
            Locale::De => "Deutsch",
            Locale::Fr => "Français",
            Locale::Es => "Español",
            Locale::Ru => "Русский",
            Locale::Zh => "中文",
        }
    }

    /// Flag image shown next to the language name
    pub fn flag_url(self) -> &'static str {
        match self {
            Locale::It => "https://flagcdn.com/w40/it.png",
            Locale::En => "https://flagcdn.com/w40/gb.png",
            Locale::De => "https://flagcdn.com/w40/de.png",
            Locale::Fr => "https://flagcdn.com/w40/fr.png",
            Locale::Es => "https://flagcdn.com/w40/es.png",
            Locale::Ru => "https://flagcdn.com/w40/ru.png",
            Locale::Zh => "https://flagcdn.com/w40/cn.png",
        }
    }

    /// File stem of the translation table (`it` for `translations/it.json`)
    pub fn file_stem(self) -> String {
        self.code().to_ascii_lowercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = HeritageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| HeritageError::InvalidInput(format!("Unsupported locale: {}", s)))
    }
}
