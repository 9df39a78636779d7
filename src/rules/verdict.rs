// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdict types produced by the rule engine.

use crate::cli::args::OutputFormat;
use console::{style, Style};
use serde::Serialize;

/// Severity of a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule name, e.g. `type-enum`.
    pub rule: String,
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional hint for fixing the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    /// Create a violation without a suggestion.
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            Severity::Warning => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        let mut output = format!(
            "{} {} [{}]",
            prefix,
            self.message,
            code_style.apply_to(&self.rule)
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of evaluating one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// The message was skipped by an ignore predicate.
    pub exempt: bool,
    /// Violations in rule-definition order. Always empty when exempt.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// A verdict for a message no rule looked at.
    pub fn exempt() -> Self {
        Self {
            exempt: true,
            violations: Vec::new(),
        }
    }

    /// A verdict for a fully evaluated message.
    pub fn evaluated(violations: Vec<Violation>) -> Self {
        Self {
            exempt: false,
            violations,
        }
    }

    /// Check if there are no error-severity violations.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Whether the lint passes; in strict mode warnings fail it too.
    pub fn passes(&self, strict: bool) -> bool {
        if strict {
            self.violations.is_empty()
        } else {
            self.is_valid()
        }
    }

    pub fn error_count(&self) -> usize {
        self.violations.iter().filter(|v| v.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations.len() - self.error_count()
    }

    /// Whether a violation of `rule` was recorded.
    pub fn has_violation(&self, rule: &str) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    /// Print the verdict for `input` (the message that was linted).
    ///
    /// Text goes to stderr, JSON to stdout.
    pub fn print(&self, input: &str, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => println!("{}", self.render_json(input)),
            _ => eprint!("{}", self.render_text(input)),
        }
    }

    /// Render in text format.
    pub fn render_text(&self, input: &str) -> String {
        let header = input.lines().next().unwrap_or("");
        let mut output = String::new();

        if self.exempt {
            output.push_str(&format!("{} {}\n", style("○").dim(), style(header).dim()));
            output.push_str(&format!("  {}\n", style("ignored").dim()));
            return output;
        }

        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        output.push_str(&format!("{} input: {}\n", status, header));

        for violation in &self.violations {
            output.push_str(&format!("  {}\n", violation.format()));
        }

        output.push_str(&format!("\n{}\n", self.summary()));
        output
    }

    /// Render in JSON format.
    pub fn render_json(&self, input: &str) -> String {
        let json = serde_json::json!({
            "input": input,
            "valid": self.is_valid(),
            "exempt": self.exempt,
            "errors": self.error_count(),
            "warnings": self.warning_count(),
            "violations": self.violations,
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.exempt {
            "Ignored".to_string()
        } else if self.is_valid() {
            if self.violations.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warning_count())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count(),
                self.warning_count()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(rule: &str) -> Violation {
        Violation::new(rule, Severity::Error, "Test error")
    }

    fn warning(rule: &str) -> Violation {
        Violation::new(rule, Severity::Warning, "Test warning")
    }

    #[test]
    fn test_verdict_valid() {
        let verdict = Verdict::evaluated(Vec::new());
        assert!(verdict.is_valid());
        assert!(verdict.passes(true));
        assert!(!verdict.exempt);
    }

    #[test]
    fn test_exempt_verdict() {
        let verdict = Verdict::exempt();
        assert!(verdict.exempt);
        assert!(verdict.violations.is_empty());
        assert!(verdict.passes(true));
        assert_eq!(verdict.summary(), "Ignored");
    }

    #[test]
    fn test_verdict_with_errors() {
        let verdict = Verdict::evaluated(vec![error("type-enum"), warning("scope-empty")]);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.error_count(), 1);
        assert_eq!(verdict.warning_count(), 1);
        assert!(verdict.has_violation("type-enum"));
        assert!(!verdict.has_violation("subject-empty"));
    }

    #[test]
    fn test_strict_fails_on_warning() {
        let verdict = Verdict::evaluated(vec![warning("scope-empty")]);
        assert!(verdict.passes(false));
        assert!(!verdict.passes(true));
    }

    #[test]
    fn test_violation_format() {
        let violation = error("type-enum").with_suggestion("Fix it");
        let formatted = violation.format();
        assert!(formatted.contains("type-enum"));
        assert!(formatted.contains("Test error"));
        assert!(formatted.contains("Fix it"));
    }

    #[test]
    fn test_render_text_lists_violations() {
        let verdict = Verdict::evaluated(vec![error("type-enum"), error("scope-empty")]);
        let text = verdict.render_text("oops no structure\n\nbody");
        assert!(text.contains("oops no structure"));
        assert!(!text.contains("body"));
        assert!(text.contains("type-enum"));
        assert!(text.contains("scope-empty"));
        assert!(text.contains("Invalid (2 errors, 0 warnings)"));
    }

    #[test]
    fn test_render_json() {
        let verdict = Verdict::evaluated(vec![error("type-enum")]);
        let json: serde_json::Value = serde_json::from_str(&verdict.render_json("x")).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["exempt"], false);
        assert_eq!(json["violations"][0]["rule"], "type-enum");
        assert_eq!(json["violations"][0]["severity"], "error");
        assert!(json["violations"][0].get("suggestion").is_none());
    }

    #[test]
    fn test_summary() {
        let mut verdict = Verdict::evaluated(Vec::new());
        assert_eq!(verdict.summary(), "Valid");

        verdict.violations.push(warning("warn"));
        assert!(verdict.summary().contains("1 warnings"));

        verdict.violations.push(error("err"));
        assert!(verdict.summary().contains("Invalid"));
    }
}
