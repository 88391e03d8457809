//! Configuration loading
//!
//! Reads `~/.config/swsearch/config.toml`. A missing file yields defaults; an
//! unreadable or malformed file yields defaults plus a warning for the footer.

pub mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SwsearchError;

pub use types::{Config, LookupConfig, SearchConfig};

const CONFIG_DIR: &str = "swsearch";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Message describing why the file was ignored, if it was
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from the given path, or the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SwsearchError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(e.into()),
    };

    parse_config_toml(&contents).map_err(|message| SwsearchError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
