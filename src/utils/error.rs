use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read gallery directory {}: {source}", .path.display())]
    GalleryReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Filesystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::IoError(_) | SiteError::GalleryReadError { .. } => ErrorCategory::Filesystem,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the gallery endpoint recovers with the fallback list
            SiteError::GalleryReadError { .. } => ErrorSeverity::Medium,
            SiteError::IoError(_) => ErrorSeverity::Critical,
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::GalleryReadError { path, .. } => {
                format!("Could not read gallery images from {}", path.display())
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            SiteError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the TOML configuration file and CLI overrides",
            ErrorCategory::Filesystem => "Check that the public directory exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
