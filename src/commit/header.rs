// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit header parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conventional header grammar: `type(scope)!: subject`.
    ///
    /// Capture groups, in order: type, scope, subject.
    static ref HEADER_REGEX: Regex = Regex::new(r"^(\w*)(?:\((.*)\))?!?: (.*)$").unwrap();
}

/// Named captures of one commit header.
///
/// Field order follows the configured field names. A field is `None` when
/// its capture group did not participate in the match, when the header did
/// not match at all, or when there is no capture group for that name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    fields: Vec<(String, Option<String>)>,
}

impl ParsedHeader {
    /// Apply the header grammar to `header`, naming capture group `i` after
    /// `field_names[i]`.
    pub fn parse<S: AsRef<str>>(header: &str, field_names: &[S]) -> Self {
        let captures = HEADER_REGEX.captures(header);
        if captures.is_none() {
            tracing::trace!("Header does not match the conventional grammar: {:?}", header);
        }

        let fields = field_names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let value = captures
                    .as_ref()
                    .and_then(|c| c.get(index + 1))
                    .map(|m| m.as_str().to_string());
                (name.as_ref().to_string(), value)
            })
            .collect();

        Self { fields }
    }

    /// Captured value of `name`, or `None` if absent or unknown.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether any field captured a value.
    pub fn is_match(&self) -> bool {
        self.fields.iter().any(|(_, value)| value.is_some())
    }

    /// Iterate over `(name, value)` pairs in field order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}
