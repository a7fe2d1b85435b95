use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for spreadsheet conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The configuration file does not exist
    #[error("{} file not found!", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but could not be understood
    #[error("Invalid configuration in {}:\n{reason}\n\nTip: Compare your file with the example configuration", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// API key or spreadsheet id is missing
    #[error("Missing required configuration in {}: GOOGLE_API_KEY and GOOGLE_SHEET_ID must be set", .path.display())]
    MissingCredentials { path: PathBuf },

    /// Requested locale is not one of the configured languages
    #[error("Unknown locale '{locale}'. Configured languages: {}\n\nTip: Add the locale to \"languages\" in your configuration", .languages.join(", "))]
    UnknownLocale {
        locale: String,
        languages: Vec<String>,
    },

    /// The spreadsheet API rejected a request or could not be reached
    #[error("{context} {message}")]
    Api { context: String, message: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create an InvalidConfig error for a configuration file
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownLocale error from the requested locale and the configured list
    pub fn unknown_locale(locale: impl Into<String>, languages: &[String]) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
            languages: languages.to_vec(),
        }
    }

    /// Create an Api error with the step that failed as context
    pub fn api_error(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Whether the CLI should print the configuration guide for this error
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::InvalidConfig { .. } | Self::MissingCredentials { .. }
        )
    }
}

/// Result type alias for ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
