//! Aggregated outcome of a batch lookup.

use super::AsnRecord;

/// Result of resolving one comma-separated batch of IP addresses.
///
/// `results` preserves the order of the batch request; duplicates in the
/// request produce duplicate entries. Invariants: `count == results.len()`
/// and `cached <= count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub results: Vec<AsnRecord>,
    /// Total number of records returned.
    pub count: usize,
    /// How many records were served from the cache store without a
    /// resolver call.
    pub cached: usize,
}

impl BatchResult {
    pub fn new(results: Vec<AsnRecord>, cached: usize) -> Self {
        let count = results.len();
        debug_assert!(cached <= count);
        Self {
            results,
            count,
            cached,
        }
    }
}
