// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CmlintConfig;

/// Commit types accepted out of the box.
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "feat", "fix", "perf", "refactor", "test", "revert", "chore", "docs", "content", "build",
    "ci", "hotfix", "bugfix", "release",
];

/// Conventional header field names, one per capture group.
pub const DEFAULT_HEADER_FIELDS: &[&str] = &["type", "scope", "subject"];

/// Messages containing any of these are skipped.
pub const DEFAULT_IGNORE_SUBSTRINGS: &[&str] = &["Draft:"];

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmlint configuration file
# SPDX-License-Identifier: MIT

[rules]
# Only these types are accepted (case-sensitive).
allowed_types = [
    "feat", "fix", "perf", "refactor", "test", "revert", "chore",
    "docs", "content", "build", "ci", "hotfix", "bugfix", "release",
]
# Reject headers without a non-empty "(scope)".
scope_required = true
# Rule levels: "error", "warning" or "off".
type_enum_level = "error"
scope_empty_level = "error"

[parser]
# Names for the captures of "type(scope): subject", in order.
header_fields = ["type", "scope", "subject"]

[ignores]
# Skip linting when the message contains any of these.
substrings = ["Draft:"]
# Skip linting when the message matches any of these regular expressions.
patterns = []
# Also skip git-generated merge, revert and fixup messages.
use_defaults = false
"#
}
