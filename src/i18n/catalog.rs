//! Translation tables and key resolution
//!
//! Every locale owns one [`LocaleTable`], a nested map whose leaves are
//! strings. Keys are dotted paths such as `nav.percorsi`. Resolution walks the
//! requested locale first, then the default locale, and finally returns the
//! key itself so a missing string shows up on the page instead of breaking it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::locale::Locale;
use crate::utils::errors::{HeritageError, Result};

/// One node of a translation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Text(String),
    Branch(BTreeMap<String, TranslationNode>),
}

/// Root of a single locale's translations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable(BTreeMap<String, TranslationNode>);

impl LocaleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON text
    ///
    /// The root must be an object and every leaf a string.
    pub fn from_json_str(locale: Locale, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| HeritageError::InvalidTable {
            locale: locale.to_string(),
            reason: e.to_string(),
        })
    }

    /// Insert a string under a dotted key, creating branches on the way
    ///
    /// An existing leaf on the path is replaced by a branch.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(last) = segments.pop() else {
            return;
        };

        let mut current = &mut self.0;
        for segment in segments {
            let node = current
                .entry(segment.to_string())
                .or_insert_with(|| TranslationNode::Branch(BTreeMap::new()));
            if let TranslationNode::Text(_) = node {
                *node = TranslationNode::Branch(BTreeMap::new());
            }
            let TranslationNode::Branch(children) = node else {
                return;
            };
            current = children;
        }
        current.insert(last.to_string(), TranslationNode::Text(value.into()));
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Walk a dotted key down to a string leaf
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.0.get(first)?;

        for segment in segments {
            node = match node {
                TranslationNode::Branch(children) => children.get(segment)?,
                TranslationNode::Text(_) => return None,
            };
        }

        match node {
            TranslationNode::Text(text) => Some(text.as_str()),
            TranslationNode::Branch(_) => None,
        }
    }

    /// All dotted keys that end on a string leaf, sorted
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.0, "", &mut keys);
        keys
    }

    /// Number of string leaves
    pub fn len(&self) -> usize {
        count_leaves(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_keys(map: &BTreeMap<String, TranslationNode>, prefix: &str, out: &mut Vec<String>) {
    for (key, node) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            TranslationNode::Text(_) => out.push(path),
            TranslationNode::Branch(children) => collect_keys(children, &path, out),
        }
    }
}

fn count_leaves(map: &BTreeMap<String, TranslationNode>) -> usize {
    map.values()
        .map(|node| match node {
            TranslationNode::Text(_) => 1,
            TranslationNode::Branch(children) => count_leaves(children),
        })
        .sum()
}

/// Translation tables for every loaded locale
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<Locale, LocaleTable>,
    default_locale: Locale,
}

impl Catalog {
    /// Create an empty catalog that falls back to `default_locale`
    pub fn new(default_locale: Locale) -> Self {
        Self {
            tables: BTreeMap::new(),
            default_locale,
        }
    }

    /// Register (or replace) the table of a locale
    pub fn insert(&mut self, locale: Locale, table: LocaleTable) {
        self.tables.insert(locale, table);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with_table(mut self, locale: Locale, table: LocaleTable) -> Self {
        self.insert(locale, table);
        self
    }

    pub fn table(&self, locale: Locale) -> Option<&LocaleTable> {
        self.tables.get(&locale)
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Locales that have a table, in selector order
    pub fn loaded_locales(&self) -> Vec<Locale> {
        self.tables.keys().copied().collect()
    }

    /// Resolve a dotted key for a locale
    ///
    /// Never fails: falls back to the default locale and then to the key.
    pub fn resolve(&self, locale: Locale, key: &str) -> String {
        if let Some(text) = self.tables.get(&locale).and_then(|table| table.lookup(key)) {
            return text.to_string();
        }

        if let Some(text) = self
            .tables
            .get(&self.default_locale)
            .and_then(|table| table.lookup(key))
        {
            if locale != self.default_locale {
                debug!(locale = %locale, key = key, fallback = %self.default_locale,
                       "Translation missing, using default locale");
            }
            return text.to_string();
        }

        warn!(locale = %locale, key = key, "Translation key not found in any table");
        key.to_string()
    }

    /// Whether `locale` itself defines `key`, without fallback
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.tables
            .get(&locale)
            .is_some_and(|table| table.lookup(key).is_some())
    }

    /// Compare every loaded table against the default locale's table
    pub fn coverage(&self) -> CoverageReport {
        let reference = self
            .tables
            .get(&self.default_locale)
            .map(LocaleTable::leaf_keys)
            .unwrap_or_default();

        let locales = self
            .tables
            .iter()
            .map(|(locale, table)| LocaleCoverage {
                locale: *locale,
                key_count: table.len(),
                missing: reference
                    .iter()
                    .filter(|key| table.lookup(key).is_none())
                    .cloned()
                    .collect(),
            })
            .collect();

        CoverageReport {
            default_locale: self.default_locale,
            total_keys: reference.len(),
            locales,
        }
    }
}

/// How complete each table is relative to the default one
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub default_locale: Locale,
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage of a single locale
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub key_count: usize,
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    /// Share of default keys this locale defines, in percent
    pub fn percent(&self, total_keys: usize) -> f64 {
        if total_keys == 0 {
            return 100.0;
        }
        let present = total_keys.saturating_sub(self.missing.len());
        present as f64 * 100.0 / total_keys as f64
    }
}
