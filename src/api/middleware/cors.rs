//! CORS middleware for the public JSON endpoints.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer applied to every route.
///
/// Open policy for a public read-only API: any origin, the standard request
/// headers, and preflight handled by the layer so handlers never see
/// `OPTIONS` requests.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            header::ACCEPT,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-csrf-token"),
        ])
}
