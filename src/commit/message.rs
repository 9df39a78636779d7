// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Raw commit message helpers.

/// Marker line git writes above the diff in verbose commit templates.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// Get the first line (header) of a raw commit message.
///
/// Handles both `\n` and `\r\n` line endings.
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}

/// Remove git comment lines from a message read from a commit-msg file.
///
/// Lines starting with `comment_char` are dropped, everything from a
/// scissors line onward is cut, and trailing blank lines are trimmed.
pub fn strip_comments(message: &str, comment_char: char) -> String {
    let mut lines = Vec::new();

    for line in message.lines() {
        if let Some(rest) = line.strip_prefix(comment_char) {
            if rest.trim() == SCISSORS {
                break;
            }
            continue;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("feat(x): a\n\nbody"), "feat(x): a");
        assert_eq!(first_line("feat(x): a\r\nbody"), "feat(x): a");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("\nsecond"), "");
    }

    #[test]
    fn test_strip_comments() {
        let raw = "fix(core): handle nulls\n\nBody text\n# Please enter the commit message\n#\n";
        assert_eq!(strip_comments(raw, '#'), "fix(core): handle nulls\n\nBody text");
    }

    #[test]
    fn test_strip_comments_scissors() {
        let raw = "feat(ui): add\n# ------------------------ >8 ------------------------\ndiff --git a b\n";
        assert_eq!(strip_comments(raw, '#'), "feat(ui): add");
    }

    #[test]
    fn test_strip_comments_keeps_hash_inside_line() {
        let raw = "fix(api): close #42";
        assert_eq!(strip_comments(raw, '#'), raw);
    }

    #[test]
    fn test_strip_comments_all_comments() {
        assert_eq!(strip_comments("# only\n# comments\n", '#'), "");
    }
}
