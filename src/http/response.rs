//! HTTP response building module
//!
//! Response body type shared by the server plus builders for responses the
//! router produces itself rather than through the static file server.

use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Body type of every response the server writes
///
/// Static files stream from disk, so the body is boxed instead of `Full`.
pub type ResponseBody = UnsyncBoxBody<Bytes, std::io::Error>;

/// Box a body whose error type is `io::Error`
pub fn boxed<B>(body: B) -> ResponseBody
where
    B: hyper::body::Body<Data = Bytes, Error = std::io::Error> + Send + 'static,
{
    body.boxed_unsync()
}

/// Empty body
pub fn empty() -> ResponseBody {
    Empty::<Bytes>::new()
        .map_err(|never| match never {})
        .boxed_unsync()
}

/// Build OPTIONS response (preflight request)
///
/// CORS headers are added later together with every other response.
pub fn build_options_response() -> Response<ResponseBody> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(empty())
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(empty())
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
