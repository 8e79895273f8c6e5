//! DTOs for the batch lookup endpoint.

use crate::domain::entities::{AsnRecord, BatchResult};
use serde::Serialize;

/// Successful lookup response:
/// `{"results": [...], "results_info": {"count": N, "cached": M}}`.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub results: Vec<AsnRecord>,
    pub results_info: ResultsInfo,
}

/// Accounting block for a batch response.
#[derive(Debug, Serialize)]
pub struct ResultsInfo {
    pub count: usize,
    pub cached: usize,
}

impl From<BatchResult> for LookupResponse {
    fn from(result: BatchResult) -> Self {
        Self {
            results_info: ResultsInfo {
                count: result.count,
                cached: result.cached,
            },
            results: result.results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let result = BatchResult::new(
            vec![AsnRecord::new("8.8.8.8", "15169", "8.8.8.0/24", "GOOGLE, US")],
            1,
        );

        let json = serde_json::to_value(LookupResponse::from(result)).unwrap();

        assert_eq!(json["results_info"]["count"], 1);
        assert_eq!(json["results_info"]["cached"], 1);
        assert_eq!(json["results"][0]["ip"], "8.8.8.8");
    }
}
