//! Request handler module
//!
//! SPA fallback routing in front of the static file server.

pub mod router;
pub mod spa;
pub mod static_files;

// Re-export main entry points
pub use router::{handle_request, SpaRouter};
