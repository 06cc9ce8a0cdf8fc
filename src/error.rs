//! Error types for event-pager
//!
//! This module defines the error hierarchy for the crate.
//! Fallible APIs return `Result<T, Error>` where Error is defined here.
//! The pagination controller itself is total and never surfaces these;
//! they appear at the strict parsing entry points, the config loader and
//! the data-source boundary.

use crate::pagination::Direction;
use thiserror::Error;

/// The main error type for event-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Malformed pagination header: {message}")]
    MalformedHeader { message: String },

    #[error("No cursor available for {direction} page")]
    MissingCursor { direction: Direction },

    #[error("Invalid cursor '{token}': {message}")]
    InvalidCursor { token: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Navigation Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid location '{location}': {message}")]
    InvalidLocation { location: String, message: String },

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed header error
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a missing cursor error
    pub fn missing_cursor(direction: Direction) -> Self {
        Self::MissingCursor { direction }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid location error
    pub fn invalid_location(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Whether the pagination widget can keep rendering after this error.
    ///
    /// Header and cursor problems degrade to disabled controls; everything
    /// else has to be reported by the host.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            Error::MalformedHeader { .. } | Error::MissingCursor { .. } | Error::InvalidCursor { .. }
        )
    }
}

/// Result type alias for event-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::malformed_header("missing '<uri>'");
        assert_eq!(
            err.to_string(),
            "Malformed pagination header: missing '<uri>'"
        );

        let err = Error::missing_cursor(Direction::Next);
        assert_eq!(err.to_string(), "No cursor available for next page");

        let err = Error::missing_field("cursor_param");
        assert_eq!(err.to_string(), "Missing required config field: cursor_param");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_soft() {
        assert!(Error::malformed_header("x").is_soft());
        assert!(Error::missing_cursor(Direction::Previous).is_soft());
        assert!(Error::invalid_cursor("abc", "bad offset").is_soft());

        assert!(!Error::config("test").is_soft());
        assert!(!Error::http_status(500, "").is_soft());
        assert!(!Error::invalid_location("::", "bad").is_soft());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
