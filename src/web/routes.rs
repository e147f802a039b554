//! Web API router construction.

use axum::{Router, routing::get};
use std::time::Duration;

use crate::state::AppState;
use crate::web::middleware::request_id::RequestIdLayer;
use crate::web::middleware::security_headers::SecurityHeadersLayer;
use crate::web::{campuses, status, user};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer};

/// Creates the web server router
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        .route("/health", get(status::health))
        .route("/status", get(status::status))
        .route("/campuses", get(campuses::list_campuses))
        .with_state(app_state.clone());

    let router = Router::new()
        .nest("/api", api_router)
        .route("/user/me", get(user::me).with_state(app_state));

    router.layer((
        // Outermost: per-request ID span + severity-proportional response logging.
        RequestIdLayer,
        // Security headers on every response (HSTS only behind a TLS proxy).
        SecurityHeadersLayer,
        // Compress API responses (gzip/brotli/zstd).
        CompressionLayer::new()
            .zstd(true)
            .br(true)
            .gzip(true)
            .quality(tower_http::CompressionLevel::Fastest),
        TimeoutLayer::new(Duration::from_secs(60)),
    ))
}
