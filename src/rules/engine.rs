// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use std::sync::Arc;

use crate::commit::{first_line, ParsedHeader};
use crate::config::RuleConfig;

use super::builtin::{Rule, BUILTIN_RULES};
use super::verdict::Verdict;

/// Evaluate one commit message against `config`.
///
/// Never fails: malformed input shows up as violations. Ignore predicates
/// run first, in order, and the first match exempts the message. Otherwise
/// every built-in rule is checked and violations come back in rule
/// definition order.
pub fn evaluate(message: &str, config: &RuleConfig) -> Verdict {
    evaluate_with(message, config, &[])
}

fn evaluate_with(message: &str, config: &RuleConfig, extra_rules: &[Arc<dyn Rule>]) -> Verdict {
    if let Some(predicate) = config
        .ignore_predicates()
        .iter()
        .find(|p| p.matches(message))
    {
        tracing::debug!("Message ignored ({})", predicate.description());
        return Verdict::exempt();
    }

    let header = ParsedHeader::parse(first_line(message), config.header_fields());

    let mut violations = Vec::new();
    let mut run = |rule: &dyn Rule| {
        if let Some(violation) = rule.check(message, &header, config) {
            tracing::trace!("Rule {} failed", rule.name());
            violations.push(violation);
        }
    };
    for rule in BUILTIN_RULES {
        run(*rule);
    }
    for rule in extra_rules {
        run(rule.as_ref());
    }

    tracing::debug!("Evaluated message with {} violation(s)", violations.len());
    Verdict::evaluated(violations)
}

/// Rule engine bound to one shared configuration.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: Arc<RuleConfig>,
    custom_rules: Vec<Arc<dyn Rule>>,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self::from_shared(Arc::new(config))
    }

    /// Create a rule engine over an already shared configuration.
    pub fn from_shared(config: Arc<RuleConfig>) -> Self {
        Self {
            config,
            custom_rules: Vec::new(),
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Add a rule checked after the built-in rules.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.custom_rules.push(Arc::from(rule));
    }

    /// Evaluate a commit message.
    pub fn evaluate(&self, message: &str) -> Verdict {
        evaluate_with(message, &self.config, &self.custom_rules)
    }

    /// Evaluate many messages; each verdict is independent of the others.
    pub fn evaluate_all<I, S>(&self, messages: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        messages
            .into_iter()
            .map(|message| self.evaluate(message.as_ref()))
            .collect()
    }
}
