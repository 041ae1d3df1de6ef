//! Core error types for dayfeed-core.
//!
//! This module defines the error hierarchy using thiserror. The fetch
//! taxonomy (transport failure, not found, permission denied) is shared by
//! the day tracker and the feed reader; each front-end maps it to the single
//! message string it shows to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayfeed-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP collaborator errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Time string could not be parsed
    #[error("Time parse error: {0}")]
    TimeParse(#[from] TimeParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Failures talking to an external API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-success HTTP status or a network exception.
    #[error("{service} request failed: {message}")]
    Transport { service: String, message: String },

    /// Empty result set, or a logical "not OK" status from the service.
    #[error("{0}")]
    NotFound(String),

    /// Device positioning was denied or is unavailable.
    #[error("{0}")]
    PermissionDenied(String),
}

impl FetchError {
    pub fn transport(service: &str, message: impl Into<String>) -> Self {
        FetchError::Transport {
            service: service.to_string(),
            message: message.into(),
        }
    }

    /// Whether this failure came from the network layer rather than the data.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

/// A wall-clock string such as `"6:02 AM"` that could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("time value is missing")]
    Missing,

    #[error("malformed time '{0}': expected H:MM[:SS] AM|PM")]
    Malformed(String),

    #[error("{field} out of range in '{input}'")]
    OutOfRange { field: &'static str, input: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_mentions_service() {
        let err = FetchError::transport("geocoding", "HTTP 502 Bad Gateway");
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "geocoding request failed: HTTP 502 Bad Gateway"
        );
    }

    #[test]
    fn not_found_displays_its_message() {
        let err = FetchError::NotFound("Location not found".into());
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Location not found");
    }

    #[test]
    fn core_error_wraps_fetch_error() {
        let err: CoreError = FetchError::PermissionDenied("denied".into()).into();
        assert_eq!(err.to_string(), "Fetch error: denied");
    }
}
