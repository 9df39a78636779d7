// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cmlint.
//!
//! Only configuration and I/O problems are errors. A commit message that
//! breaks a rule is reported through a [`Verdict`](crate::rules::Verdict),
//! never through this module.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Lint run errors (reported by the CLI host, not the engine)
    #[error("Lint failed: {0}")]
    Lint(#[from] LintError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
///
/// These are raised while a [`RuleConfig`](crate::config::RuleConfig) is
/// being built and never at evaluation time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("At least one allowed commit type is required")]
    EmptyAllowedTypes,

    #[error("Duplicate header field: '{name}'")]
    DuplicateHeaderField { name: String },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnorePattern { pattern: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Outcome of a CLI lint run that must end with a non-zero exit status.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("{errors} error(s), {warnings} warning(s) found")]
    ViolationsFound { errors: usize, warnings: usize },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
