//! SPA fallback routing module
//!
//! Decides whether a GET request for a client-side route should be answered
//! with the mount's `index.html` instead of going to the file system as-is.

use crate::config::SpaConfig;
use crate::error::{Result, ServerError};
use crate::http::mime;
use crate::logger;
use hyper::Uri;
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of the rewrite decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Serve the requested path unchanged
    Keep,
    /// Serve the fallback document instead
    Fallback,
}

/// Fallback rule for one mount prefix
#[derive(Debug, Clone)]
pub struct SpaFallback {
    mount_prefix: String,
    fallback_uri: Uri,
    root: PathBuf,
}

impl SpaFallback {
    pub fn new(spa: &SpaConfig, root: PathBuf) -> Result<Self> {
        let fallback_path = spa.fallback_path();
        let fallback_uri = fallback_path
            .parse::<Uri>()
            .map_err(|e| ServerError::invalid("spa.fallback_file", format!("{fallback_path}: {e}")))?;

        Ok(Self {
            mount_prefix: spa.mount_prefix.clone(),
            fallback_uri,
            root,
        })
    }

    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }

    /// URI every rewritten request is pointed at
    pub const fn fallback_uri(&self) -> &Uri {
        &self.fallback_uri
    }

    /// Cheap part of the rule: the path mentions the mount and has no extension
    ///
    /// The prefix is matched anywhere in the path, not only at the start.
    pub fn is_candidate(&self, path: &str) -> bool {
        path.contains(self.mount_prefix.as_str()) && !mime::has_extension(path)
    }

    /// Decide whether `path` (no query string) should be rewritten
    pub async fn decide(&self, path: &str) -> Rewrite {
        if !self.is_candidate(path) {
            return Rewrite::Keep;
        }

        // Traversal or undecodable paths are left for the file server to reject
        let Some(candidate) = resolve_under_root(&self.root, path) else {
            return Rewrite::Keep;
        };

        match fs::metadata(&candidate).await {
            Ok(_) => Rewrite::Keep,
            // A path running through a regular file fails with ENOTDIR: nothing exists there either
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Rewrite::Fallback
            }
            Err(e) => {
                logger::log_warning(&format!(
                    "Cannot stat '{}', serving request unchanged: {e}",
                    candidate.display()
                ));
                Rewrite::Keep
            }
        }
    }
}

/// Map a URL path onto the file system below `root`
///
/// Returns `None` for paths that are not valid UTF-8 once decoded or that
/// try to climb out of the root.
fn resolve_under_root(root: &Path, path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let mut resolved = root.to_path_buf();

    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => resolved.push(s),
        }
    }

    Some(resolved)
}
