//! Static file serving for the built site.
//!
//! This module provides embedded static file serving with SPA fallback
//! support. The Trunk build output in `dist/` is embedded directly in the
//! binary, so a single executable can deliver the whole site.

use axum::{
    body::Body,
    extract::Request,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Embedded static files from the Trunk build.
///
/// The files are embedded at compile time from the `dist/` directory.
/// Running `trunk build --release` refreshes the content before a release
/// build of the server.
#[derive(Embed)]
#[folder = "dist"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
#[include = "*.wasm"]
#[include = "*.png"]
#[include = "*.ico"]
#[include = "*.svg"]
#[include = "*.woff"]
#[include = "*.woff2"]
pub struct StaticAssets;

/// Serves static files with SPA fallback.
///
/// This handler:
/// 1. First tries to serve the exact requested path
/// 2. If not found and the path doesn't look like a file, serves
///    `index.html` (SPA fallback)
/// 3. Otherwise returns 404
///
/// Responses carry an ETag; requests presenting a matching `If-None-Match`
/// get 304 with an empty body.
pub async fn serve_static(request: Request) -> Response {
    let path = request.uri().path();

    // Remove leading slash for embed lookup
    let path = path.trim_start_matches('/');

    let if_none_match = request
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);

    // If path is empty or root, serve index.html
    if path.is_empty() {
        return serve_file("index.html", if_none_match.as_deref());
    }

    // Try to serve the exact path first
    if let Some(content) = StaticAssets::get(path) {
        return file_response(path, content.data.as_ref(), if_none_match.as_deref());
    }

    // Check if this looks like a file request (has extension)
    let looks_like_file = PathBuf::from(path)
        .extension()
        .is_some_and(|ext| !ext.is_empty());

    // If it looks like a file but wasn't found, return 404
    if looks_like_file {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    // SPA fallback: serve index.html for all other routes
    serve_file("index.html", if_none_match.as_deref())
}

/// Serves a specific file from embedded assets.
fn serve_file(path: &str, if_none_match: Option<&str>) -> Response {
    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref(), if_none_match),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with content type, caching, and ETag.
fn file_response(path: &str, content: &[u8], if_none_match: Option<&str>) -> Response {
    let etag = content_etag(content);

    if if_none_match == Some(etag.as_str()) {
        return Response::builder()
            .status(StatusCode::NOT_MODIFIED)
            .header(header::ETAG, etag)
            .body(Body::empty())
            .unwrap_or_else(|_| StatusCode::NOT_MODIFIED.into_response());
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .header(header::ETAG, etag)
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Strong ETag derived from the file content.
fn content_etag(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let mut tag = String::with_capacity(2 + digest.len() * 2);
    tag.push('"');
    for byte in digest.iter().take(16) {
        tag.push_str(&format!("{byte:02x}"));
    }
    tag.push('"');
    tag
}

/// Returns appropriate Cache-Control header based on file path.
///
/// - Hashed Trunk artifacts (js/wasm/css): long cache (1 year)
/// - HTML files: no cache (always revalidate)
/// - Other files: short cache (1 hour)
fn cache_control_for_path(path: &str) -> &'static str {
    let extension = std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    // Trunk emits content-hashed filenames for these, so they never change
    // in place.
    if matches!(extension, "js" | "wasm" | "css") {
        "public, max-age=31536000, immutable"
    } else if extension.eq_ignore_ascii_case("html") {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

/// Returns true if embedded assets are available.
///
/// This can be used to check if the site was built and embedded before
/// attempting to serve it.
#[must_use]
pub fn has_embedded_assets() -> bool {
    // Check if we have at least the index.html file
    StaticAssets::get("index.html").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        // Hashed build artifacts get long cache
        assert_eq!(
            cache_control_for_path("cloudfolio-8844921cb086bb8b_bg.wasm"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(
            cache_control_for_path("cloudfolio-8844921cb086bb8b.js"),
            "public, max-age=31536000, immutable"
        );
        assert_eq!(
            cache_control_for_path("site-5d10869c3ebd1d35.css"),
            "public, max-age=31536000, immutable"
        );

        // HTML gets no-cache
        assert_eq!(
            cache_control_for_path("index.html"),
            "no-cache, must-revalidate"
        );

        // Other files get short cache
        assert_eq!(
            cache_control_for_path("favicon.png"),
            "public, max-age=3600"
        );
    }

    #[test]
    fn test_content_etag_is_stable_and_quoted() {
        let first = content_etag(b"hello");
        let second = content_etag(b"hello");
        assert_eq!(first, second);
        assert!(first.starts_with('"') && first.ends_with('"'));

        assert_ne!(content_etag(b"hello"), content_etag(b"world"));
    }

    #[test]
    fn test_has_embedded_assets() {
        // dist/index.html is committed, so the placeholder page is always
        // available even before a Trunk build.
        assert!(has_embedded_assets());
    }
}
