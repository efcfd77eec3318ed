//! Response header policy module
//!
//! Headers the dev server stamps onto every response before it is sent,
//! whatever its status or origin.

use hyper::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, CONTENT_TYPE,
};

use super::mime;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const CACHE_POLICY: &str = "no-cache";

/// Insert the CORS and cache headers, replacing any existing values
pub fn apply_dev_headers(headers: &mut HeaderMap) {
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_POLICY));
}

/// Pin the Content-Type for paths with a forced MIME type
///
/// Returns true if the header was changed.
pub fn apply_content_type_override(headers: &mut HeaderMap, path: &str) -> bool {
    let Some(content_type) = mime::content_type_override(path) else {
        return false;
    };
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    true
}
