//! Error handling for Chat Heritage
//!
//! Runtime lookups on the site never fail: missing translations fall back,
//! unknown locales and anchors are ignored. The error type below covers the
//! fallible ambient paths only (configuration and translation loading).

use thiserror::Error;

/// Main error type for the Chat Heritage coordination layer
#[derive(Error, Debug)]
pub enum HeritageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Translation table for {locale} is invalid: {reason}")]
    InvalidTable { locale: String, reason: String },

    #[error("Default translation table missing: {0}")]
    MissingDefaultTable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for Chat Heritage operations
pub type Result<T> = std::result::Result<T, HeritageError>;

impl HeritageError {
    /// Check if the error is recoverable
    ///
    /// A broken non-default table only degrades one locale, everything else
    /// stops startup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            HeritageError::Config(_) => false,
            HeritageError::ConfigSource(_) => false,
            HeritageError::InvalidTable { .. } => true,
            HeritageError::MissingDefaultTable(_) => false,
            HeritageError::InvalidInput(_) => true,
            HeritageError::Serialization(_) => true,
            HeritageError::Toml(_) => false,
            HeritageError::Io(_) => true,
            HeritageError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HeritageError::Config(_) => ErrorSeverity::Critical,
            HeritageError::ConfigSource(_) => ErrorSeverity::Critical,
            HeritageError::MissingDefaultTable(_) => ErrorSeverity::Critical,
            HeritageError::InvalidTable { .. } => ErrorSeverity::Warning,
            HeritageError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_table_is_recoverable_warning() {
        let err = HeritageError::InvalidTable {
            locale: "DE".to_string(),
            reason: "leaf is not a string".to_string(),
        };
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(
            err.to_string(),
            "Translation table for DE is invalid: leaf is not a string"
        );
    }

    #[test]
    fn test_missing_default_table_is_critical() {
        let err = HeritageError::MissingDefaultTable("translations/it.json".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity().to_string(), "CRITICAL");
    }
}
