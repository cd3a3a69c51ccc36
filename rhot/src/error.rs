//! Error handling module for the rhot CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use rho_lex::LexError;
use thiserror::Error;

/// Main error type for the rhot CLI application.
#[derive(Error, Debug)]
pub enum RhotError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a theme file is malformed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when Rho source does not lex.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization/deserialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using RhotError.
pub type Result<T> = std::result::Result<T, RhotError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rho_util::Position;

    #[test]
    fn test_config_error_display() {
        let err = RhotError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_theme_error_display() {
        let err = RhotError::Theme("unknown token kind 'Foo'".to_string());
        assert_eq!(err.to_string(), "Theme error: unknown token kind 'Foo'");
    }

    #[test]
    fn test_validation_error_display() {
        let err = RhotError::Validation("2 files failed".to_string());
        assert_eq!(err.to_string(), "Validation error: 2 files failed");
    }

    #[test]
    fn test_lex_error_conversion() {
        let lex_err = LexError::UnterminatedString {
            position: Position::START,
        };
        let rhot_err: RhotError = lex_err.into();
        assert!(matches!(rhot_err, RhotError::Lex(_)));
        assert_eq!(
            rhot_err.to_string(),
            "Lexical error: unterminated string literal starting at 1:1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rhot_err: RhotError = io_err.into();
        assert!(matches!(rhot_err, RhotError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let rhot_err: RhotError = json_err.into();
        assert!(matches!(rhot_err, RhotError::Json(_)));
    }
}
