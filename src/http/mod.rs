//! HTTP protocol layer module
//!
//! Response body type, response builders and the header policy applied to
//! every outgoing response. Independent of the SPA routing rules.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used items
pub use headers::{apply_content_type_override, apply_dev_headers};
pub use response::{build_options_response, ResponseBody};
