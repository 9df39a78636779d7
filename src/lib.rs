// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Conventional Commit Message Linter
//!
//! Checks commit messages against a small, declarative rule set.
//!
//! # Features
//!
//! - **Type enum**: only configured commit types are accepted
//! - **Required scope**: reject headers without a non-empty `(scope)`
//! - **Header grammar**: `type(scope): subject` with configurable field names
//! - **Ignore predicates**: skip messages such as drafts entirely
//!
//! # Example
//!
//! ```
//! use cmlint::config::RuleConfig;
//! use cmlint::rules::evaluate;
//!
//! let config = RuleConfig::default();
//!
//! let verdict = evaluate("docs(readme): update usage", &config);
//! assert!(verdict.violations.is_empty());
//!
//! let verdict = evaluate("oops no structure", &config);
//! assert!(verdict.has_violation("type-enum"));
//! assert!(verdict.has_violation("scope-empty"));
//!
//! assert!(evaluate("Draft: wip change", &config).exempt);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::{CmlintConfig, RuleConfig};
pub use error::{CmlintError, Result};
pub use rules::{evaluate, RuleEngine, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
