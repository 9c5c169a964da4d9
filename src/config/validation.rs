//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{HeritageError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_scroll_config(&settings.scroll)?;
    validate_carousel_config(&settings.carousel)?;
    validate_visibility_config(&settings.visibility)?;
    validate_session_config(&settings.session)?;
    validate_links_config(&settings.links)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.translations_dir.is_empty() {
        return Err(HeritageError::Config(
            "Translations directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate scroll geometry
fn validate_scroll_config(config: &super::ScrollConfig) -> Result<()> {
    let margins = [
        ("header_height", config.header_height),
        ("mobile_header_offset", config.mobile_header_offset),
        ("mobile_breakpoint", config.mobile_breakpoint),
        ("mounted_arrival_margin", config.mounted_arrival_margin),
        ("fresh_arrival_margin", config.fresh_arrival_margin),
        ("scrolled_threshold", config.scrolled_threshold),
    ];

    for (name, value) in margins {
        if !value.is_finite() || value < 0.0 {
            return Err(HeritageError::Config(
                format!("Scroll setting {} must be a non-negative number, got {}", name, value)
            ));
        }
    }

    if config.mobile_header_offset > config.header_height {
        return Err(HeritageError::Config(
            "Mobile header offset cannot exceed the header height".to_string()
        ));
    }

    Ok(())
}

/// Validate carousel configuration
fn validate_carousel_config(config: &super::CarouselConfig) -> Result<()> {
    if config.steps == 0 {
        return Err(HeritageError::Config(
            "Carousel must have at least one step".to_string()
        ));
    }

    if !config.swipe_threshold.is_finite() || config.swipe_threshold < 0.0 {
        return Err(HeritageError::Config(
            "Swipe threshold must be a non-negative number".to_string()
        ));
    }

    Ok(())
}

/// Validate visibility configuration
fn validate_visibility_config(config: &super::VisibilityConfig) -> Result<()> {
    if !config.root_margin.is_finite() || config.root_margin < 0.0 {
        return Err(HeritageError::Config(
            "Visibility root margin must be a non-negative number".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.scroll_target_key.trim().is_empty() {
        return Err(HeritageError::Config(
            "Session scroll target key is required".to_string()
        ));
    }

    Ok(())
}

/// Validate outbound link configuration
fn validate_links_config(config: &super::LinksConfig) -> Result<()> {
    if config.whatsapp_number.is_empty() {
        return Err(HeritageError::Config(
            "WhatsApp number is required".to_string()
        ));
    }

    if !config.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(HeritageError::Config(
            format!("WhatsApp number must contain digits only: {}", config.whatsapp_number)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(HeritageError::Config(
            "Log level is required".to_string()
        ));
    }

    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.level) {
        return Err(HeritageError::Config(
            format!("Invalid log filter {}: {}", config.level, e)
        ));
    }

    Ok(())
}
