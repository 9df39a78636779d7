// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module evaluates a raw commit message against a
//! [`RuleConfig`](crate::config::RuleConfig) and produces a [`Verdict`].

mod builtin;
mod engine;
mod ignore;
mod verdict;

pub use builtin::{Rule, ScopeEmpty, TypeEnum};
pub use engine::{evaluate, RuleEngine};
pub use ignore::IgnorePredicate;
pub use verdict::{Severity, Verdict, Violation};
