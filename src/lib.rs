//! Local development server for a single-page application.
//!
//! Serves a directory of static files and, below a configured mount prefix,
//! answers client-side routes that have no file on disk with the mount's
//! `index.html`. Every response carries permissive CORS headers and
//! `Cache-Control: no-cache`; `.json` files are always `application/json`.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::Config;
pub use error::ServerError;
pub use handler::SpaRouter;
