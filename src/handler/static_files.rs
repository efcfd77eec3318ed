//! Static file serving module
//!
//! Thin wrapper over `tower_http`'s `ServeDir`, which owns path resolution,
//! traversal protection, MIME guessing, HEAD, conditional requests and the
//! 404/405 responses.

use crate::http::response::{self, ResponseBody};
use hyper::{Request, Response};
use std::path::{Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// File server rooted at the content directory
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
    serve_dir: ServeDir,
}

impl StaticFiles {
    pub fn new(root: &Path) -> Self {
        // Directories serve their index.html; there is no directory listing
        let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);
        Self {
            root: root.to_path_buf(),
            serve_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the request against the root and produce the file response
    pub async fn serve<B>(&self, req: Request<B>) -> Response<ResponseBody>
    where
        B: Send + 'static,
    {
        let resp = self
            .serve_dir
            .clone()
            .oneshot(req)
            .await
            .unwrap_or_else(|never| match never {});
        resp.map(response::boxed)
    }
}
