// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from cmlint.toml. The file
//! schema is lenient (every section has defaults); validation happens when
//! it is turned into a [`RuleConfig`].

use serde::{Deserialize, Serialize};

use super::default::{DEFAULT_ALLOWED_TYPES, DEFAULT_HEADER_FIELDS, DEFAULT_IGNORE_SUBSTRINGS};
use super::rule_config::RuleConfig;
use crate::error::ConfigError;
use crate::rules::{IgnorePredicate, Severity};

/// The main configuration structure for cmlint.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CmlintConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Header parser configuration.
    pub parser: ParserConfig,

    /// Messages exempt from linting.
    pub ignores: IgnoresConfig,
}

impl CmlintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Validate this configuration and build the immutable rule set.
    pub fn to_rule_config(&self) -> Result<RuleConfig, ConfigError> {
        let mut builder = RuleConfig::builder()
            .allowed_types(self.rules.allowed_types.iter().cloned())
            .scope_required(self.rules.scope_required)
            .header_fields(self.parser.header_fields.iter().cloned())
            .type_enum_level(self.rules.type_enum_level)
            .scope_empty_level(self.rules.scope_empty_level);

        for substring in &self.ignores.substrings {
            builder = builder.ignore(IgnorePredicate::substring(substring.clone()));
        }
        for pattern in &self.ignores.patterns {
            builder = builder.ignore(IgnorePredicate::pattern(pattern)?);
        }
        if self.ignores.use_defaults {
            for predicate in IgnorePredicate::git_defaults() {
                builder = builder.ignore(predicate);
            }
        }

        builder.build()
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed commit types, in display order.
    pub allowed_types: Vec<String>,

    /// Whether a non-empty scope is required.
    pub scope_required: bool,

    /// Level of the `type-enum` rule.
    pub type_enum_level: RuleLevel,

    /// Level of the `scope-empty` rule.
    pub scope_empty_level: RuleLevel,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
            scope_required: true,
            type_enum_level: RuleLevel::Error,
            scope_empty_level: RuleLevel::Error,
        }
    }
}

/// Header parser configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Names given to the header grammar's capture groups, in order.
    pub header_fields: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_fields: DEFAULT_HEADER_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Ignore configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IgnoresConfig {
    /// Messages containing any of these substrings are exempt.
    pub substrings: Vec<String>,

    /// Messages matching any of these regular expressions are exempt.
    pub patterns: Vec<String>,

    /// Also exempt git-generated messages (merges, reverts, fixups).
    pub use_defaults: bool,
}

impl Default for IgnoresConfig {
    fn default() -> Self {
        Self {
            substrings: DEFAULT_IGNORE_SUBSTRINGS.iter().map(|s| s.to_string()).collect(),
            patterns: Vec::new(),
            use_defaults: false,
        }
    }
}

/// How strictly a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// The rule is disabled.
    Off,
    /// Violations are reported but do not fail the lint.
    Warning,
    /// Violations fail the lint.
    #[default]
    Error,
}

impl RuleLevel {
    /// Severity reported for a violation, or `None` when the rule is off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}
