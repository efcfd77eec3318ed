//! Logger module
//!
//! Provides logging utilities for the dev server including:
//! - Startup banner and shutdown notice
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::handler::SpaRouter;
use hyper::Version;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Until then everything goes
/// to stdout/stderr.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, router: &SpaRouter, config: &Config) {
    write_info(&format!("Serving at http://localhost:{}", addr.port()));
    write_info(&format!("Serving directory: {}", router.root().display()));
    write_info(&format!(
        "SPA routing enabled for {}* paths",
        router.spa().mount_prefix()
    ));
    write_info("JSON files served with correct MIME type");
    write_info(&format!("[CONFIG] Bound to {addr}"));
    if let Some(workers) = config.server.workers {
        write_info(&format!("[CONFIG] Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("[CONFIG] Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("[CONFIG] Error log: {path}"));
    }
}

pub fn log_shutdown() {
    write_info("\nShutting down server...");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_spa_rewrite(from: &str, to: &str) {
    write_info(&format!("[SPA] {from} -> {to}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

/// Version label as it appears in a request line (`1.1`, `2`)
pub fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
