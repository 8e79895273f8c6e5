//! Cache store trait and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache store operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache store operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// External key-value store with per-key expiry.
///
/// Keys are raw IP strings; values are JSON-serialized
/// [`crate::domain::entities::AsnRecord`]s. Entry lifecycle is owned entirely
/// by the store's TTL mechanism - the service never deletes entries, and an
/// expired entry is indistinguishable from one that was never written.
///
/// No cross-key atomicity is required. Two concurrent misses that both
/// resolve and write the same key are tolerated: last write wins, and both
/// writers would have computed the same record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on a hit
    /// - `Ok(None)` when the key is absent or expired
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the store cannot be reached. The lookup
    /// pipeline treats such errors as misses (fail-open).
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the write fails. The lookup pipeline logs
    /// the failure and still returns the freshly resolved record.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Enumerates all live keys.
    ///
    /// Used only by the administrative `/cache` endpoint, never by the
    /// lookup pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the scan fails; the administrative
    /// endpoint surfaces this as a 403 (fail-closed).
    async fn scan_keys(&self) -> CacheResult<Vec<String>>;

    /// Checks whether the store backend is reachable.
    async fn health_check(&self) -> bool;
}
