// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_BLUR_GRACE_MS: u64 = 100;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;
pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Search input behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Quiet window before a lookup fires
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Delay between losing focus and hiding the suggestion list
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Shortest trimmed query that reaches the lookup service
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

/// Remote lookup service configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
