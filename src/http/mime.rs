//! MIME type override module
//!
//! The static file server guesses content types from file extensions. A few
//! extensions are pinned here so the dev server answers with a fixed value
//! regardless of the guesser's table.

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Return the forced Content-Type for a request path, if any
///
/// # Examples
/// ```
/// use spa_dev_server::http::mime::content_type_override;
/// assert_eq!(content_type_override("/database/chapter1.json"), Some("application/json"));
/// assert_eq!(content_type_override("/about.html"), None);
/// ```
pub fn content_type_override(path: &str) -> Option<&'static str> {
    match extension(path) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some(JSON_CONTENT_TYPE),
        _ => None,
    }
}

/// Extension of the last path segment, without the dot
///
/// Leading dots of the segment do not start an extension (`.hidden` has
/// none), a trailing dot yields an empty extension, and a path ending in `/`
/// has none.
pub fn extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let stem_start = segment.len() - segment.trim_start_matches('.').len();
    let dot = segment[stem_start..].rfind('.')?;
    Some(&segment[stem_start + dot + 1..])
}

/// Whether the last path segment carries an extension (including a bare trailing dot)
pub fn has_extension(path: &str) -> bool {
    extension(path).is_some()
}
