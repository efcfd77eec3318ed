//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: SPA rewrite before the file
//! server, MIME and header policy after it.

use crate::config::Config;
use crate::error::Result;
use crate::handler::spa::{Rewrite, SpaFallback};
use crate::handler::static_files::StaticFiles;
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::header::{CONTENT_LENGTH, IF_RANGE, RANGE, REFERER, USER_AGENT};
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Request handler: preprocess, delegate to the file server, postprocess
#[derive(Debug, Clone)]
pub struct SpaRouter {
    spa: SpaFallback,
    files: StaticFiles,
    access_log: bool,
    access_log_format: String,
}

impl SpaRouter {
    /// Build the router for an already resolved content root
    pub fn new(config: &Config, root: PathBuf) -> Result<Self> {
        Ok(Self {
            spa: SpaFallback::new(&config.spa, root.clone())?,
            files: StaticFiles::new(&root),
            access_log: config.logging.access_log,
            access_log_format: config.logging.access_log_format.clone(),
        })
    }

    pub const fn spa(&self) -> &SpaFallback {
        &self.spa
    }

    /// Absolute content root
    pub fn root(&self) -> &Path {
        self.files.root()
    }

    /// Produce the response for one request
    pub async fn handle<B>(&self, mut req: Request<B>) -> Response<ResponseBody>
    where
        B: Send + 'static,
    {
        if *req.method() == Method::OPTIONS {
            let mut resp = http::build_options_response();
            http::apply_dev_headers(resp.headers_mut());
            return resp;
        }

        // Byte ranges are not offered; clients always get the full body
        req.headers_mut().remove(RANGE);
        req.headers_mut().remove(IF_RANGE);

        if *req.method() == Method::GET {
            let original = req.uri().path().to_string();
            if self.spa.decide(&original).await == Rewrite::Fallback {
                *req.uri_mut() = self.spa.fallback_uri().clone();
                if self.access_log {
                    logger::log_spa_rewrite(&original, self.spa.fallback_uri().path());
                }
            }
        }

        let served_path = req.uri().path().to_string();
        let mut resp = self.files.serve(req).await;

        let status = resp.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            http::apply_content_type_override(resp.headers_mut(), &served_path);
        }
        http::apply_dev_headers(resp.headers_mut());
        resp
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    router: Arc<SpaRouter>,
    peer_addr: SocketAddr,
) -> std::result::Result<Response<ResponseBody>, Infallible>
where
    B: Send + 'static,
{
    if !router.access_log {
        return Ok(router.handle(req).await);
    }

    let started = Instant::now();
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = logger::http_version_label(req.version()).to_string();
    entry.referer = header_string(&req, REFERER);
    entry.user_agent = header_string(&req, USER_AGENT);

    let resp = router.handle(req).await;

    entry.status = resp.status().as_u16();
    entry.body_bytes = resp
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok());
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, &router.access_log_format);

    Ok(resp)
}

fn header_string<B>(req: &Request<B>, name: hyper::header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
