use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for swsearch
#[derive(Debug, Error)]
pub enum SwsearchError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to start lookup runtime: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
