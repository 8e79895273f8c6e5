//! Handler for the administrative cache dump.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use tracing::warn;

use crate::domain::entities::AsnRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Dumps the owner field of every cached record, keyed by IP.
///
/// # Endpoint
///
/// `GET /cache`
///
/// # Errors
///
/// Fail-closed, unlike the lookup pipeline: any store failure during the
/// scan or the per-key reads returns 403 with
/// `{"success": false, "message": ...}`. Entries that vanish between scan
/// and read (TTL expiry) or fail to decode are skipped.
pub async fn cache_dump_handler(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, AppError> {
    let keys = state.cache.scan_keys().await.map_err(store_error)?;

    let mut output = BTreeMap::new();
    for key in keys {
        let Some(raw) = state.cache.get(&key).await.map_err(store_error)? else {
            continue;
        };

        match serde_json::from_str::<AsnRecord>(&raw) {
            Ok(record) => {
                output.insert(key, record.owner);
            }
            Err(e) => warn!("Skipping undecodable cache entry {}: {}", key, e),
        }
    }

    Ok(Json(output))
}

fn store_error(e: crate::infrastructure::cache::CacheError) -> AppError {
    warn!("Cache dump failed: {}", e);
    AppError::store_unavailable(
        "Unable to load keys from the cache store for display. Please try again later.",
    )
}
