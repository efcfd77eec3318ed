//! Error types for server startup.
//!
//! Request-level failures never surface here: missing files, bad methods and
//! unreadable paths become HTTP responses produced by the static file server.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded or deserialized.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    /// Configuration loaded but holds an unusable value.
    #[error("Invalid config value for `{key}`: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// The content root does not exist or is not a directory.
    #[error("Content root {} is not usable: {reason}", .path.display())]
    RootDirectory { path: PathBuf, reason: String },

    /// I/O error (binding, runtime, signals, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
