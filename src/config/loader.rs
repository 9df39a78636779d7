// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{CmlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CmlintConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("cmlint").join("config.toml");
        if path.is_file() {
            return Some(path);
        }
    }

    None
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CmlintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CmlintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CmlintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CmlintConfig> {
    toml::from_str(content).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
