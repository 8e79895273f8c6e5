//! Bounded memoization of whole batch outcomes.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::services::LookupService;
use crate::domain::entities::BatchResult;
use crate::error::AppError;

/// Memoized outcome for one exact batch string, success or failure.
#[derive(Clone)]
enum MemoOutcome {
    Success(BatchResult),
    Invalid { ip: String },
}

impl MemoOutcome {
    fn into_result(self) -> Result<BatchResult, AppError> {
        match self {
            MemoOutcome::Success(result) => Ok(result),
            MemoOutcome::Invalid { ip } => Err(AppError::Validation { ip }),
        }
    }
}

/// Wraps [`LookupService`] with a bounded LRU keyed by the exact, unsplit
/// batch request string.
///
/// A repeated identical batch string replays the stored outcome - success or
/// validation failure - without touching the cache store or the resolver.
/// Consequence, kept from the original service: a memoized result can
/// outlive the per-IP TTL of the underlying store entries. Eviction is
/// purely capacity-driven.
///
/// The LRU is owned by this instance and guarded by a mutex. The lock is
/// released while the pipeline runs, so two concurrent first-time requests
/// for the same string may both compute and both insert; that duplicate work
/// is accepted, the bound itself is never violated.
pub struct MemoizedLookup {
    inner: LookupService,
    memo: Mutex<LruCache<String, MemoOutcome>>,
}

impl MemoizedLookup {
    /// Creates a memoizing wrapper holding at most `capacity` distinct batch
    /// strings.
    pub fn new(inner: LookupService, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            memo: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Resolves a batch, replaying a previously stored outcome when the
    /// exact same string was seen before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] exactly as [`LookupService::lookup`]
    /// would, whether computed or replayed.
    pub async fn lookup(&self, batch: &str) -> Result<BatchResult, AppError> {
        let memoized = {
            let mut memo = self.memo.lock().await;
            memo.get(batch).cloned()
        };

        if let Some(outcome) = memoized {
            debug!("Memo HIT: {}", batch);
            return outcome.into_result();
        }

        let outcome = match self.inner.lookup(batch).await {
            Ok(result) => MemoOutcome::Success(result),
            Err(AppError::Validation { ip }) => MemoOutcome::Invalid { ip },
            Err(other) => return Err(other),
        };

        self.memo
            .lock()
            .await
            .put(batch.to_string(), outcome.clone());

        outcome.into_result()
    }

    /// Number of batch strings currently memoized. Never exceeds the
    /// configured capacity.
    pub async fn memoized_entries(&self) -> usize {
        self.memo.lock().await.len()
    }
}
