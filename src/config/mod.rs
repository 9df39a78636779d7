// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module handles loading and parsing cmlint.toml, and turning it into
//! the validated [`RuleConfig`] the rule engine runs against.

pub mod default;
mod loader;
mod rule_config;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use rule_config::{RuleConfig, RuleConfigBuilder};
pub use schema::*;
