// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::ParsedHeader;
use crate::config::RuleConfig;

use super::verdict::Violation;

/// A single commit message rule.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Rule name reported in violations, e.g. `type-enum`.
    fn name(&self) -> &str;

    /// Check one message. `header` is the already-parsed first line.
    fn check(&self, message: &str, header: &ParsedHeader, config: &RuleConfig)
        -> Option<Violation>;
}

/// Built-in rules in definition order.
pub(crate) const BUILTIN_RULES: &[&dyn Rule] = &[&TypeEnum, &ScopeEmpty];

/// Rejects headers whose `type` field is missing or not an allowed type.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeEnum;

impl Rule for TypeEnum {
    fn name(&self) -> &str {
        "type-enum"
    }

    fn check(
        &self,
        _message: &str,
        header: &ParsedHeader,
        config: &RuleConfig,
    ) -> Option<Violation> {
        let severity = config.type_enum_level().severity()?;

        let message = match header.get("type") {
            Some(t) if config.is_allowed_type(t) => return None,
            Some(t) if !t.is_empty() => format!("type '{}' is not allowed", t),
            _ => "type may not be empty".to_string(),
        };

        Some(
            Violation::new(self.name(), severity, message).with_suggestion(format!(
                "Use one of: {}",
                config.allowed_types().join(", ")
            )),
        )
    }
}

/// Rejects headers without a non-empty `scope` when a scope is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeEmpty;

impl Rule for ScopeEmpty {
    fn name(&self) -> &str {
        "scope-empty"
    }

    fn check(
        &self,
        _message: &str,
        header: &ParsedHeader,
        config: &RuleConfig,
    ) -> Option<Violation> {
        if !config.scope_required() {
            return None;
        }
        let severity = config.scope_empty_level().severity()?;

        match header.get("scope") {
            Some(scope) if !scope.is_empty() => None,
            _ => Some(
                Violation::new(self.name(), severity, "scope may not be empty")
                    .with_suggestion("Add a scope in parentheses: type(scope): subject"),
            ),
        }
    }
}
