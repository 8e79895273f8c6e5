//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /get/{ip}` - Batch ASN lookup, `{ip}` is a comma-separated list
//! - `GET /cache`    - Administrative dump of cached record owners
//! - `GET /ping`     - Plain-text liveness probe
//! - `GET /`         - Banner, or lookup when a `q` query parameter is given
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Open policy with preflight handling
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{cache_dump_handler, index_handler, lookup_handler, ping_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/get/{ip}", get(lookup_handler))
        .route("/cache", get(cache_dump_handler))
        .route("/ping", get(ping_handler))
        .route("/", get(index_handler))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
