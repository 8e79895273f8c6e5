//! Handler for the liveness probe.

/// Plain-text liveness probe.
///
/// # Endpoint
///
/// `GET /ping`
pub async fn ping_handler() -> &'static str {
    "pong"
}
