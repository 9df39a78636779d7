// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The validated, immutable rule set handed to the engine.

use std::collections::HashSet;

use super::default::{DEFAULT_ALLOWED_TYPES, DEFAULT_HEADER_FIELDS, DEFAULT_IGNORE_SUBSTRINGS};
use super::schema::RuleLevel;
use crate::error::ConfigError;
use crate::rules::IgnorePredicate;

/// Rule configuration used to evaluate commit messages.
///
/// A `RuleConfig` always satisfies two invariants: it has at least one
/// allowed type, and its header field names are distinct. The only way to
/// get one besides [`Default`] is [`RuleConfigBuilder::build`], which checks
/// both.
#[derive(Clone)]
pub struct RuleConfig {
    allowed_types: Vec<String>,
    scope_required: bool,
    header_fields: Vec<String>,
    ignore_predicates: Vec<IgnorePredicate>,
    type_enum_level: RuleLevel,
    scope_empty_level: RuleLevel,
}

impl RuleConfig {
    /// Start building a rule configuration from scratch.
    pub fn builder() -> RuleConfigBuilder {
        RuleConfigBuilder::new()
    }

    /// Allowed commit types, in configuration order.
    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    /// Whether `commit_type` is allowed (case-sensitive).
    pub fn is_allowed_type(&self, commit_type: &str) -> bool {
        self.allowed_types.iter().any(|t| t == commit_type)
    }

    pub fn scope_required(&self) -> bool {
        self.scope_required
    }

    /// Names of the header grammar's capture groups.
    pub fn header_fields(&self) -> &[String] {
        &self.header_fields
    }

    pub fn ignore_predicates(&self) -> &[IgnorePredicate] {
        &self.ignore_predicates
    }

    pub fn type_enum_level(&self) -> RuleLevel {
        self.type_enum_level
    }

    pub fn scope_empty_level(&self) -> RuleLevel {
        self.scope_empty_level
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
            scope_required: true,
            header_fields: DEFAULT_HEADER_FIELDS.iter().map(|f| f.to_string()).collect(),
            ignore_predicates: DEFAULT_IGNORE_SUBSTRINGS
                .iter()
                .map(|s| IgnorePredicate::substring(*s))
                .collect(),
            type_enum_level: RuleLevel::Error,
            scope_empty_level: RuleLevel::Error,
        }
    }
}

impl std::fmt::Debug for RuleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleConfig")
            .field("allowed_types", &self.allowed_types)
            .field("scope_required", &self.scope_required)
            .field("header_fields", &self.header_fields)
            .field("ignore_predicates", &self.ignore_predicates)
            .field("type_enum_level", &self.type_enum_level)
            .field("scope_empty_level", &self.scope_empty_level)
            .finish()
    }
}

/// Builder for [`RuleConfig`].
///
/// Starts empty: no allowed types, scope optional, the conventional
/// `type`/`scope`/`subject` header fields and no ignore predicates.
#[derive(Debug, Clone)]
pub struct RuleConfigBuilder {
    allowed_types: Vec<String>,
    scope_required: bool,
    header_fields: Vec<String>,
    ignore_predicates: Vec<IgnorePredicate>,
    type_enum_level: RuleLevel,
    scope_empty_level: RuleLevel,
}

impl Default for RuleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            allowed_types: Vec::new(),
            scope_required: false,
            header_fields: DEFAULT_HEADER_FIELDS.iter().map(|f| f.to_string()).collect(),
            ignore_predicates: Vec::new(),
            type_enum_level: RuleLevel::Error,
            scope_empty_level: RuleLevel::Error,
        }
    }

    /// Replace the allowed types.
    pub fn allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn scope_required(mut self, required: bool) -> Self {
        self.scope_required = required;
        self
    }

    /// Replace the header field names.
    pub fn header_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Append an ignore predicate.
    pub fn ignore(mut self, predicate: IgnorePredicate) -> Self {
        self.ignore_predicates.push(predicate);
        self
    }

    /// Append an ignore predicate from a closure.
    pub fn ignore_fn<F>(self, description: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.ignore(IgnorePredicate::new(description, f))
    }

    pub fn type_enum_level(mut self, level: RuleLevel) -> Self {
        self.type_enum_level = level;
        self
    }

    pub fn scope_empty_level(mut self, level: RuleLevel) -> Self {
        self.scope_empty_level = level;
        self
    }

    /// Validate and build the configuration.
    ///
    /// Duplicate allowed types collapse to their first occurrence.
    pub fn build(self) -> Result<RuleConfig, ConfigError> {
        if self.allowed_types.is_empty() {
            return Err(ConfigError::EmptyAllowedTypes);
        }

        let mut seen = HashSet::new();
        for field in &self.header_fields {
            if !seen.insert(field.as_str()) {
                return Err(ConfigError::DuplicateHeaderField {
                    name: field.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        let before = self.allowed_types.len();
        let allowed_types: Vec<String> = self
            .allowed_types
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        if allowed_types.len() != before {
            tracing::debug!(
                "Collapsed {} duplicate allowed type(s)",
                before - allowed_types.len()
            );
        }

        Ok(RuleConfig {
            allowed_types,
            scope_required: self.scope_required,
            header_fields: self.header_fields,
            ignore_predicates: self.ignore_predicates,
            type_enum_level: self.type_enum_level,
            scope_empty_level: self.scope_empty_level,
        })
    }
}
