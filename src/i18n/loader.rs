//! Translation loader
//!
//! Reads one JSON file per locale from the translations directory into a
//! [`Catalog`]. The default locale's file is mandatory, the others are
//! optional and only degrade their own locale when absent or broken.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use super::catalog::{Catalog, LocaleTable};
use super::locale::Locale;
use crate::config::I18nConfig;
use crate::utils::errors::{HeritageError, Result};

/// Loads translation tables from disk
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    translations_dir: PathBuf,
    default_locale: Locale,
}

impl TranslationLoader {
    /// Create a loader for the configured directory
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations_dir: PathBuf::from(&config.translations_dir),
            default_locale: config.default_locale,
        }
    }

    /// Path of the table file for a locale
    pub fn file_path(&self, locale: Locale) -> PathBuf {
        self.translations_dir
            .join(format!("{}.json", locale.file_stem()))
    }

    /// Load every supported locale found in the directory
    pub async fn load(&self) -> Result<Catalog> {
        let mut catalog = Catalog::new(self.default_locale);

        for locale in Locale::ALL {
            let file_path = self.file_path(locale);

            if !fs::try_exists(&file_path).await.unwrap_or(false) {
                if locale == self.default_locale {
                    return Err(HeritageError::MissingDefaultTable(
                        file_path.display().to_string(),
                    ));
                }
                warn!("Translation file not found: {}", file_path.display());
                continue;
            }

            match load_table(&file_path, locale).await {
                Ok(table) => {
                    info!(locale = %locale, keys = table.len(), "Loaded translations");
                    catalog.insert(locale, table);
                }
                Err(e) if locale != self.default_locale && e.is_recoverable() => {
                    warn!(severity = %e.severity(), "Skipping translations for {}: {}", locale, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(catalog)
    }
}

/// Load and parse a single locale file
pub async fn load_table(file_path: &Path, locale: Locale) -> Result<LocaleTable> {
    let content = fs::read_to_string(file_path).await?;
    let table = LocaleTable::from_json_str(locale, &content)?;
    debug!(locale = %locale, path = %file_path.display(), "Parsed translation table");
    Ok(table)
}
