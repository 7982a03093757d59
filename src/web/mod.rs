//! Web server module for Cloudfolio.
//!
//! Serves the built single-page site from embedded assets, plus a small
//! health endpoint for deployment checks.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /*` - Embedded static files with SPA fallback

use std::net::SocketAddr;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;

pub mod static_files;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
    /// Whether the built site is embedded in this binary.
    pub assets_embedded: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        assets_embedded: static_files::has_embedded_assets(),
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with the health endpoint and static fallback.
#[must_use]
pub fn create_router() -> Router {
    // The site is public static content, so a permissive CORS policy is
    // fine here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback(static_files::serve_static)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the web server on the address configured in `config`.
///
/// # Errors
///
/// Returns an error if the configured address is invalid or the server
/// fails to start.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    if !static_files::has_embedded_assets() {
        warn!("No embedded site found; run `trunk build` before building the server");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid host/port combination")?;

    let app = create_router();

    info!("Starting Cloudfolio server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
