//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub i18n: I18nConfig,
    pub scroll: ScrollConfig,
    pub carousel: CarouselConfig,
    pub visibility: VisibilityConfig,
    pub session: SessionConfig,
    pub links: LinksConfig,
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_locale: Locale,
    pub translations_dir: String,
}

/// Scroll geometry, in CSS pixels
///
/// `mounted_arrival_margin` and `fresh_arrival_margin` are tuned separately
/// for the two header call sites and must not be merged.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrollConfig {
    pub header_height: f64,
    pub mobile_header_offset: f64,
    pub mobile_breakpoint: f64,
    pub mounted_arrival_margin: f64,
    pub fresh_arrival_margin: f64,
    pub settle_delay_ms: u64,
    pub scrolled_threshold: f64,
}

/// Step carousel configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarouselConfig {
    pub steps: usize,
    pub swipe_threshold: f64,
}

/// Sticky CTA visibility configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisibilityConfig {
    /// Vertical margin shrinking the viewport at top and bottom
    pub root_margin: f64,
}

/// Session-scoped storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub scroll_target_key: String,
}

/// Outbound link configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinksConfig {
    pub whatsapp_number: String,
    pub prefill_message: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from defaults, `config.toml` and environment variables
    ///
    /// Environment variables use the `CHAT_HERITAGE` prefix and `__` as the
    /// section separator, e.g. `CHAT_HERITAGE__CAROUSEL__STEPS=5`.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit file, still honouring the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::load(config::File::from(path.as_ref()).required(true))
    }

    fn load(file: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CHAT_HERITAGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::HeritageError> {
        super::validation::validate_settings(self)
    }

    /// Render the settings as TOML, e.g. to bootstrap a `config.toml`
    pub fn to_toml(&self) -> Result<String, crate::utils::errors::HeritageError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            scroll: ScrollConfig::default(),
            carousel: CarouselConfig::default(),
            visibility: VisibilityConfig::default(),
            session: SessionConfig::default(),
            links: LinksConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::It,
            translations_dir: "translations".to_string(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_height: 80.0,
            mobile_header_offset: 15.0,
            mobile_breakpoint: 640.0,
            mounted_arrival_margin: 65.0,
            fresh_arrival_margin: 15.0,
            settle_delay_ms: 100,
            scrolled_threshold: 50.0,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            steps: 4,
            swipe_threshold: 50.0,
        }
    }
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { root_margin: 80.0 }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scroll_target_key: "scrollToSection".to_string(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "393514312461".to_string(),
            prefill_message: "START CHAT —————>".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}
