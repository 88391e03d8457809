//! File-backed logging
//!
//! The terminal belongs to the TUI, so log records go to a file. Logging is on
//! when a path is given, and always on in debug builds.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::SwsearchError;

#[cfg_attr(not(debug_assertions), allow(dead_code))]
const DEFAULT_LOG_FILE: &str = "swsearch.log";

/// Path logging should write to, if any
pub fn log_path(requested: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = requested {
        return Some(path.to_path_buf());
    }

    #[cfg(debug_assertions)]
    {
        Some(std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }
    #[cfg(not(debug_assertions))]
    {
        None
    }
}

/// Install the global logger. Returns the file in use, or `None` when logging is off.
pub fn init_logging(requested: Option<&Path>) -> Result<Option<PathBuf>, SwsearchError> {
    let Some(path) = log_path(requested) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| SwsearchError::Logging(e.to_string()))?;

    log::info!("swsearch {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_path_wins() {
        let path = PathBuf::from("/tmp/custom.log");
        assert_eq!(log_path(Some(&path)), Some(path));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_builds_default_to_temp_dir() {
        let path = log_path(None).unwrap();
        assert!(path.ends_with(DEFAULT_LOG_FILE));
        assert!(path.starts_with(std::env::temp_dir()));
    }
}
