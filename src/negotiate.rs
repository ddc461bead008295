//! Response representation selection
//!
//! Resolves the `Accept` header into an explicit media type so handlers
//! dispatch on an enum with a defined default branch instead of a
//! framework helper.

use axum::http::{header, HeaderMap};

/// Negotiated response representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Html,
    Json,
}

/// Resolve the negotiated media type from request headers.
///
/// The first recognized media range in the `Accept` list wins; a
/// missing header, wildcards, and anything unrecognized fall back to
/// HTML.
pub fn resolve(headers: &HeaderMap) -> MediaType {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return MediaType::Html;
    };

    for entry in accept.split(',') {
        let range = entry.split(';').next().unwrap_or("").trim();
        if range.eq_ignore_ascii_case("application/json") {
            return MediaType::Json;
        }
        if range.eq_ignore_ascii_case("text/html") {
            return MediaType::Html;
        }
    }

    MediaType::Html
}
