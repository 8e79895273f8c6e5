//! No-op cache store implementation.

use super::service::{CacheResult, CacheStore};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache store that does nothing.
///
/// Every `get` is a miss and every `set` is discarded, so each lookup goes
/// straight to the resolver. Useful for benchmarking resolver behavior and
/// for tests that should bypass caching entirely.
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }

    async fn scan_keys(&self) -> CacheResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
