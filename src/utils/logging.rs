//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the coordination layer.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;
use crate::i18n::Locale;
use crate::utils::errors::{HeritageError, Result};

/// Initialize logging based on configuration
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| HeritageError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "chat-heritage.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| HeritageError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a successful locale selection
pub fn log_locale_change(from: Locale, to: Locale) {
    info!(
        from = %from,
        to = %to,
        "Locale changed"
    );
}

/// Log a route transition
pub fn log_navigation(from: &str, to: &str, pending_section: Option<&str>) {
    info!(
        from = from,
        to = to,
        pending_section = pending_section,
        "Navigation performed"
    );
}

/// Log an issued scroll command
pub fn log_scroll(anchor: &str, top: f64, context: &str) {
    debug!(
        anchor = anchor,
        top = top,
        context = context,
        "Scroll issued"
    );
}

/// Log a scroll request whose anchor is not on the page
pub fn log_missing_anchor(anchor: &str, context: &str) {
    debug!(
        anchor = anchor,
        context = context,
        "Anchor not present on page, scroll skipped"
    );
}
