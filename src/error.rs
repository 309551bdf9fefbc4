//! Error types for preflight operations.
//!
//! This module defines [`PreflightError`], the error type used for
//! everything outside the probes themselves, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Probes never return `PreflightError`. They convert every failure into
//!   a tagged outcome (see [`crate::requirements::CheckResult`] and
//!   [`crate::connectivity::ConnectivityOutcome`]) so the report can be
//!   built from whatever happened.
//! - `PreflightError` covers configuration and I/O problems that stop the
//!   tool before any probe runs.
//! - `anyhow::Error` (via `PreflightError::Other`) wraps the unexpected.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Configuration file passed explicitly does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PreflightError::ConfigNotFound {
            path: PathBuf::from("/foo/preflight.yml"),
        };
        assert!(err.to_string().contains("/foo/preflight.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PreflightError::ConfigParseError {
            path: PathBuf::from("/preflight.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/preflight.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = PreflightError::ConfigValidationError {
            message: "credential_env must not be empty".into(),
        };
        assert!(err.to_string().contains("credential_env must not be empty"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PreflightError = io_err.into();
        assert!(matches!(err, PreflightError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: PreflightError = anyhow::anyhow!("something odd").into();
        assert_eq!(err.to_string(), "something odd");
    }
}
