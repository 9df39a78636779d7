// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates: checks that exempt a message from every rule.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::commit::first_line;
use crate::error::ConfigError;

type PredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// A rule-bypass check applied to the full commit message.
///
/// Cloning is cheap; the predicate itself is shared.
#[derive(Clone)]
pub struct IgnorePredicate {
    description: String,
    predicate: Arc<PredicateFn>,
}

impl IgnorePredicate {
    /// Wrap an arbitrary predicate.
    pub fn new<F>(description: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(f),
        }
    }

    /// Exempt messages containing `needle` anywhere.
    pub fn substring(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        let description = format!("contains {:?}", needle);
        Self::new(description, move |message| message.contains(needle.as_str()))
    }

    /// Exempt messages matching a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidIgnorePattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        let description = format!("matches /{}/", pattern);
        Ok(Self::new(description, move |message| regex.is_match(message)))
    }

    /// Predicates for messages git writes itself: merges, reverts,
    /// autosquash markers and automatic merges.
    pub fn git_defaults() -> Vec<Self> {
        vec![
            Self::header_matches("git merge", &MERGE_REGEX),
            Self::header_matches("git revert", &REVERT_REGEX),
            Self::header_matches("autosquash marker", &AUTOSQUASH_REGEX),
            Self::header_matches("automatic merge", &AUTOMATIC_MERGE_REGEX),
        ]
    }

    fn header_matches(description: &str, regex: &'static Regex) -> Self {
        Self::new(description, move |message| regex.is_match(first_line(message)))
    }

    /// Human-readable summary, used for logging.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `message` is exempt under this predicate.
    pub fn matches(&self, message: &str) -> bool {
        (self.predicate)(message)
    }
}

impl fmt::Debug for IgnorePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IgnorePredicate")
            .field(&self.description)
            .finish()
    }
}

lazy_static::lazy_static! {
    static ref MERGE_REGEX: Regex = Regex::new(
        r"^(Merge (pull request|branch|remote-tracking branch|tag) .+|Merged .+ (in|into) .+)$"
    ).unwrap();
    static ref REVERT_REGEX: Regex = Regex::new(r#"^Revert ".+"$"#).unwrap();
    static ref AUTOSQUASH_REGEX: Regex = Regex::new(r"^(fixup|squash|amend)! ").unwrap();
    static ref AUTOMATIC_MERGE_REGEX: Regex =
        Regex::new(r"^(Automatic merge|Auto-merged .+ into .+)").unwrap();
}
