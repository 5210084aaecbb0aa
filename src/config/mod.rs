//! Configuration management.
//!
//! Settings come from an optional TOML file layered under environment
//! variables prefixed with `BOOK_FETCHER` (nested keys use `__`, e.g.
//! `BOOK_FETCHER_API__TIMEOUT_SECS=10`).
//!
//! ```toml
//! [api]
//! base_url = "https://openlibrary.org/search.json"
//! timeout_secs = 30
//!
//! [output]
//! path = "filtered_books.json"
//! indent = 2
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use ::config::ConfigError;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "book-fetcher.toml";

/// Default search endpoint
pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org/search.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Search endpoint URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the filtered books are written
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// JSON indentation width
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            indent: default_indent(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("filtered_books.json")
}

fn default_indent() -> usize {
    crate::formatters::DEFAULT_INDENT
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from an optional file, with environment overrides
///
/// Environment variables apply whether or not a file is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(::config::File::from(path));
    }

    builder
        .add_source(
            ::config::Environment::with_prefix("BOOK_FETCHER")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

/// Find a configuration file in the working directory or the user config directory
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("book-fetcher").join("config.toml"))
        .filter(|path| path.is_file())
}
