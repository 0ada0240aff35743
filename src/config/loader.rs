//! Configuration loading
//!
//! Reads `<config dir>/memoir/config.toml` when it exists. Any failure
//! (missing file, unreadable, malformed TOML) falls back to defaults; the
//! config file is optional by design.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Location of the config file, if a config directory exists on this
/// platform.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("memoir").join("config.toml"))
}

/// Load the configuration, falling back to defaults.
pub fn load() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

/// Load from an explicit path, falling back to defaults.
pub fn load_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            log::debug!("ignoring malformed config at {}: {e}", path.display());
            Config::default()
        }
    }
}
