//! Runtime configuration.
//!
//! Built from defaults, then `POSTBOARD_*` environment variables, then
//! command-line overrides.
//!
//! # Example
//!
//! ```
//! use postboard::config::AppConfig;
//! use std::time::Duration;
//!
//! let config = AppConfig::default()
//!     .with_base_url("http://localhost:3000")
//!     .with_request_timeout(Duration::from_secs(5));
//! assert_eq!(config.base_url, "http://localhost:3000");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliOverrides;
use crate::gateway::DEFAULT_BASE_URL;

pub const ENV_BASE_URL: &str = "POSTBOARD_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "POSTBOARD_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "POSTBOARD_LOG_FILE";
pub const ENV_LOG: &str = "POSTBOARD_LOG";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API root, no trailing slash required
    pub base_url: String,
    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,
    /// Where tracing output goes
    pub log_file: PathBuf,
    /// `EnvFilter` directive string
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_file: default_log_file(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overlaid with the `POSTBOARD_*` variables.
    ///
    /// Empty values are ignored. An unparsable timeout keeps the default.
    /// The log filter falls back to `RUST_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = env_value(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = env_value(ENV_TIMEOUT_SECS).and_then(|v| v.parse::<u64>().ok()) {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(filter) = env_value(ENV_LOG).or_else(|| env_value("RUST_LOG")) {
            config = config.with_log_filter(filter);
        }

        config
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Self {
        if let Some(url) = &overrides.base_url {
            self = self.with_base_url(url.clone());
        }
        if let Some(secs) = overrides.timeout_secs {
            self = self.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(path) = &overrides.log_file {
            self = self.with_log_file(path.clone());
        }
        self
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `<cache dir>/postboard/postboard.log`, or the working directory when the
/// platform has no cache dir.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("postboard"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("postboard.log")
}
