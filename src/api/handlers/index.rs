//! Handler for the root endpoint.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::dto::LookupResponse;
use crate::error::AppError;
use crate::state::AppState;

const BANNER: &str = "asnjson: putting an IP address to an ASN";

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    q: Option<String>,
}

/// Root endpoint: banner string, or batch lookup when `q` is present.
///
/// # Endpoint
///
/// - `GET /` - static banner
/// - `GET /?q=1.2.3.4,8.8.8.8` - same behavior (and same memoization) as
///   `GET /get/1.2.3.4,8.8.8.8`
pub async fn index_handler(
    Query(query): Query<IndexQuery>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match query.q {
        Some(batch) if !batch.is_empty() => {
            let result = state.lookup.lookup(&batch).await?;
            Ok(Json(LookupResponse::from(result)).into_response())
        }
        _ => Ok(BANNER.into_response()),
    }
}
