// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::Config;
use crate::error::{GraphError, Result};

/// Reads and parses a config file, failing on any problem.
///
/// # Errors
/// `Io` if the file cannot be read, `Config` if it is not valid TOML for
/// [`Config`] or fails validation.
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| GraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let config = parse_toml(&content).map_err(|message| GraphError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    config.validate().map_err(|message| GraphError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    Ok(config)
}

/// Reads `path` if it exists. Missing files give the defaults; unreadable
/// or malformed files are logged and also give the defaults.
#[must_use]
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read_config(path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            Config::default()
        }
    }
}

pub(crate) fn parse_toml(content: &str) -> std::result::Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}

/// Writes `config` as TOML.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(config: &Config, path: &Path) -> anyhow::Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
