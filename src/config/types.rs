// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub server: ServerConfig,
    pub spa: SpaConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Content root; relative paths are resolved against the executable's directory
    pub root_dir: String,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// SPA fallback routing configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SpaConfig {
    /// Substring that enables fallback routing, e.g. `/database/`
    pub mount_prefix: String,
    /// File served from the mount prefix when a client-side route has no file
    pub fallback_file: String,
}

impl SpaConfig {
    /// URL path of the fallback document, e.g. `/database/index.html`
    pub fn fallback_path(&self) -> String {
        format!("{}{}", self.mount_prefix, self.fallback_file)
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (common, combined, json, or custom pattern)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds before a connection is dropped
    pub connection_timeout: u64,
}
