//! Integration tests for the Cloudfolio static site server.
//!
//! These tests require the `serve` feature to be enabled:
//! ```bash
//! cargo test --features serve web_server
//! ```

#![cfg(feature = "serve")]

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cloudfolio::web::create_router;

fn test_router() -> Router {
    create_router()
}

/// Helper to make a GET request and collect status, headers, and body.
async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request failed");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes()
        .to_vec();

    (status, headers, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = test_router();
    let (status, _, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).expect("health body is not JSON");
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    // dist/index.html is committed, so assets are always present.
    assert_eq!(json["assets_embedded"], true);
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let app = test_router();
    let (status, headers, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("<html"));
}

#[tokio::test]
async fn test_index_html_is_revalidated() {
    let app = test_router();
    let (_, headers, _) = get(&app, "/").await;

    assert_eq!(
        headers
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-cache, must-revalidate")
    );
}

#[tokio::test]
async fn test_missing_file_returns_404() {
    let app = test_router();
    let (status, _, _) = get(&app, "/assets/missing-bundle.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_extensionless_route_falls_back_to_index() {
    // Deep links into the single-page app must serve the shell.
    let app = test_router();
    let (status, headers, _) = get(&app, "/certifications").await;

    assert_eq!(status, StatusCode::OK);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_etag_conditional_request_returns_304() {
    let app = test_router();
    let (_, headers, _) = get(&app, "/").await;
    let etag = headers
        .get(header::ETAG)
        .and_then(|v| v.to_str().ok())
        .expect("index response carries no ETag")
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .header(header::IF_NONE_MATCH, &etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("request failed");

    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    assert!(body.is_empty());
}
