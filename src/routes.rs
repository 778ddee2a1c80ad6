//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`            - Shorten a URL (plain-text body)
//! - `POST /api/shorten` - Shorten a URL (JSON)
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Compression** - gzip response bodies when the client accepts it
//! - **Decompression** - transparently inflate gzip request bodies

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::decompression::RequestDecompressionLayer;

use crate::api::handlers::{
    health_handler, redirect_handler, shorten_handler, shorten_text_handler,
};
use crate::api::middleware;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_text_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(middleware::tracing::layer())
        .layer(CompressionLayer::new())
        .layer(RequestDecompressionLayer::new())
}
