// Configuration module entry point
// Builds the immutable server configuration once at startup

mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, ServerError};

pub use types::{Config, LoggingConfig, PerformanceConfig, ServerConfig, SpaConfig};

/// Optional config file looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "devserver.toml";
/// Environment override prefix, e.g. `DEVSERVER_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "DEVSERVER";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ROOT_DIR: &str = "site";
pub const DEFAULT_MOUNT_PREFIX: &str = "/database/";
pub const DEFAULT_FALLBACK_FILE: &str = "index.html";

impl Config {
    /// Load configuration using the executable's directory as base
    pub fn load() -> Result<Self> {
        let base_dir = executable_dir()?;
        Self::load_from(&base_dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the given file (missing file is fine) plus environment
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration built from source-level defaults only
    pub fn defaults() -> Result<Self> {
        let cfg: Self = with_defaults(config::Config::builder())?
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Semantic checks serde cannot express
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.spa.mount_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(ServerError::invalid(
                "spa.mount_prefix",
                format!("'{prefix}' must start and end with '/'"),
            ));
        }
        let fallback = &self.spa.fallback_file;
        if fallback.is_empty() || fallback.contains('/') {
            return Err(ServerError::invalid(
                "spa.fallback_file",
                format!("'{fallback}' must be a plain file name"),
            ));
        }
        if self.server.root_dir.is_empty() {
            return Err(ServerError::invalid("server.root_dir", "must not be empty"));
        }
        if self.server.workers == Some(0) {
            return Err(ServerError::invalid("server.workers", "must be at least 1"));
        }
        self.socket_addr().map(|_| ())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ServerError::invalid("server.host", format!("Invalid address: {e}")))
    }

    /// Resolve the content root to an absolute, canonical directory.
    ///
    /// Relative roots are joined onto `base_dir` rather than the process
    /// working directory.
    pub fn resolve_root(&self, base_dir: &Path) -> Result<PathBuf> {
        let configured = Path::new(&self.server.root_dir);
        let joined = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            base_dir.join(configured)
        };

        let root = joined
            .canonicalize()
            .map_err(|e| ServerError::RootDirectory {
                path: joined.clone(),
                reason: e.to_string(),
            })?;
        if !root.is_dir() {
            return Err(ServerError::RootDirectory {
                path: root,
                reason: "not a directory".to_string(),
            });
        }
        Ok(root)
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(builder
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .set_default("server.root_dir", DEFAULT_ROOT_DIR)?
        .set_default("spa.mount_prefix", DEFAULT_MOUNT_PREFIX)?
        .set_default("spa.fallback_file", DEFAULT_FALLBACK_FILE)?
        .set_default("logging.access_log", true)?
        .set_default("logging.access_log_format", "common")?
        .set_default("performance.keep_alive", true)?
        .set_default("performance.connection_timeout", 300)?)
}

/// Directory containing the running executable
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ServerError::invalid("server.root_dir", "executable has no parent directory")
    })
}
