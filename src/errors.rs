//! Error types for the pricefilter shell.
//!
//! The filtering core is total and never fails; everything here concerns
//! reading inputs, loading configuration and checking results.
//!
//! # Error Codes
//!
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Input document errors
//! - E020-E029: Configuration errors
//! - E050-E059: Validation errors
//!
//! ```rust
//! use pricefilter::errors::{ErrorCode, PriceFilterError};
//!
//! let err = PriceFilterError::config("unknown strategy 'fast'");
//! assert_eq!(err.code(), ErrorCode::CONFIG_INVALID);
//! assert!(err.is_user_fixable());
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - file not found
    pub const IO_FILE_NOT_FOUND: ErrorCode = ErrorCode("E001");
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Input document could not be decoded
    pub const INPUT_MALFORMED: ErrorCode = ErrorCode("E010");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file not found
    pub const CONFIG_FILE_NOT_FOUND: ErrorCode = ErrorCode("E022");

    /// Validation error - generic
    pub const VALIDATION_GENERIC: ErrorCode = ErrorCode("E050");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for pricefilter operations
#[derive(Debug, Error)]
pub enum PriceFilterError {
    /// File system related errors
    #[error("[{code}] I/O error: {message}{}", path_suffix(.path))]
    Io {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input document could not be decoded into product records
    #[error("[{}] Malformed {format} input{}: {message}", ErrorCode::INPUT_MALFORMED, path_suffix(.path))]
    MalformedInput {
        format: &'static str,
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("[{code}] Configuration error: {message}{}", path_suffix(.path))]
    Config {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },

    /// Validation errors
    #[error("[{}] Validation error: {message}", ErrorCode::VALIDATION_GENERIC)]
    Validation { message: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" (path: {})", p.display()))
        .unwrap_or_default()
}

impl PriceFilterError {
    /// Create an I/O error from a std::io::Error.
    pub fn from_io_error(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::IO_FILE_NOT_FOUND,
            _ => ErrorCode::IO_GENERIC,
        };
        Self::Io {
            code,
            message: err.to_string(),
            path,
            source: Some(err),
        }
    }

    pub fn malformed_input(
        format: &'static str,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self::MalformedInput {
            format,
            message: message.into(),
            path,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_INVALID,
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_FILE_NOT_FOUND,
            message: "configuration file not found".to_string(),
            path: Some(path.into()),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { code, .. } | Self::Config { code, .. } => *code,
            Self::MalformedInput { .. } => ErrorCode::INPUT_MALFORMED,
            Self::Validation { .. } => ErrorCode::VALIDATION_GENERIC,
        }
    }

    /// Whether the user can fix this error by changing their input or config.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { code, .. } => *code == ErrorCode::IO_FILE_NOT_FOUND,
            Self::MalformedInput { .. } | Self::Config { .. } => true,
            Self::Validation { .. } => false,
        }
    }
}

/// Result type alias for pricefilter operations
pub type Result<T> = std::result::Result<T, PriceFilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_io_error_gets_e001() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = PriceFilterError::from_io_error(io, Some(PathBuf::from("products.json")));
        assert_eq!(err.code(), ErrorCode::IO_FILE_NOT_FOUND);
        assert!(err.is_user_fixable());
        assert_eq!(
            err.to_string(),
            "[E001] I/O error: gone (path: products.json)"
        );
    }

    #[test]
    fn other_io_errors_are_generic() {
        let io = std::io::Error::other("disk on fire");
        let err = PriceFilterError::from_io_error(io, None);
        assert_eq!(err.code(), ErrorCode::IO_GENERIC);
        assert!(!err.is_user_fixable());
        assert_eq!(err.to_string(), "[E009] I/O error: disk on fire");
    }

    #[test]
    fn malformed_input_message_names_format() {
        let err = PriceFilterError::malformed_input("yaml", "bad indent", None);
        assert_eq!(err.code(), ErrorCode::INPUT_MALFORMED);
        assert_eq!(err.to_string(), "[E010] Malformed yaml input: bad indent");
    }

    #[test]
    fn config_not_found_has_e022() {
        let err = PriceFilterError::config_not_found("/tmp/none.toml");
        assert_eq!(err.code().as_str(), "E022");
    }

    #[test]
    fn validation_is_not_user_fixable() {
        let err = PriceFilterError::validation("forms disagree");
        assert_eq!(err.code(), ErrorCode::VALIDATION_GENERIC);
        assert!(!err.is_user_fixable());
        assert_eq!(err.to_string(), "[E050] Validation error: forms disagree");
    }
}
