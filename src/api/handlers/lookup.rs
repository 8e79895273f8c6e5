//! Handler for batch ASN lookups.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::LookupResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a comma-separated list of IP addresses.
///
/// # Endpoint
///
/// `GET /get/{ip}` where `{ip}` is one address or a comma-separated list,
/// e.g. `/get/1.2.3.4,8.8.8.8`.
///
/// # Request Flow
///
/// 1. The memoization layer replays the whole response for a previously
///    seen identical list
/// 2. Otherwise each address is looked up in the cache store, with misses
///    resolved upstream and written back with the configured TTL
///
/// # Errors
///
/// Returns 400 Bad Request with `{"success": false, "message": ...}` when
/// any address in the list is invalid; no partial results are returned.
pub async fn lookup_handler(
    Path(batch): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LookupResponse>, AppError> {
    let result = state.lookup.lookup(&batch).await?;
    Ok(Json(LookupResponse::from(result)))
}
