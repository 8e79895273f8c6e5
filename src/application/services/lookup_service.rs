//! Cache-aside lookup pipeline.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{AsnRecord, BatchResult};
use crate::domain::resolver::AsnResolver;
use crate::error::AppError;
use crate::infrastructure::cache::CacheStore;
use tracing::{debug, warn};

/// Resolves batches of IP addresses through the cache store, falling back to
/// the resolver on misses and writing fresh records back with a TTL.
///
/// Stateless per call: the only shared mutable resource is the cache store,
/// which provides its own single-key consistency, so concurrent lookups need
/// no coordination at this layer.
pub struct LookupService {
    resolver: Arc<dyn AsnResolver>,
    cache: Arc<dyn CacheStore>,
    record_ttl: Duration,
}

impl LookupService {
    /// Creates a lookup service writing cache entries with `record_ttl`.
    pub fn new(
        resolver: Arc<dyn AsnResolver>,
        cache: Arc<dyn CacheStore>,
        record_ttl: Duration,
    ) -> Self {
        Self {
            resolver,
            cache,
            record_ttl,
        }
    }

    /// Resolves a comma-separated batch of IP addresses, in order.
    ///
    /// Candidates are taken verbatim from the split - no trimming, no
    /// dedup - so `"8.8.8.8,8.8.8.8"` yields two records and a stray space
    /// makes a candidate invalid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first invalid address
    /// encountered. The whole batch fails: no partial results are returned,
    /// even for addresses that resolved (or were cached) before the invalid
    /// one. Cache store failures never fail the batch; reads fail open to
    /// the resolver and write errors are only logged.
    pub async fn lookup(&self, batch: &str) -> Result<BatchResult, AppError> {
        let mut results = Vec::new();
        let mut cached = 0;

        for ip in batch.split(',') {
            if let Some(record) = self.read_cached(ip).await {
                results.push(record);
                cached += 1;
                continue;
            }

            let record = self.resolver.resolve(ip).await?;
            self.write_through(ip, &record).await;
            results.push(record);
        }

        Ok(BatchResult::new(results, cached))
    }

    /// Fail-open cache read: a store error or an undecodable value is
    /// logged and treated as a miss.
    async fn read_cached(&self, ip: &str) -> Option<AsnRecord> {
        match self.cache.get(ip).await {
            Ok(Some(raw)) => match serde_json::from_str::<AsnRecord>(&raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Discarding undecodable cache entry for {}: {}", ip, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Cache read for {} failed, treating as miss: {}", ip, e);
                None
            }
        }
    }

    /// Writes a freshly resolved record to the cache store. Failures are
    /// logged and swallowed; the caller still returns the record.
    async fn write_through(&self, ip: &str, record: &AsnRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize record for {}: {}", ip, e);
                return;
            }
        };

        match self.cache.set(ip, &raw, self.record_ttl).await {
            Ok(()) => debug!("Cached record for {}", ip),
            Err(e) => warn!("Cache write for {} failed: {}", ip, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolver::MockAsnResolver;
    use crate::infrastructure::cache::{CacheError, MockCacheStore};

    fn google_record() -> AsnRecord {
        AsnRecord::new("8.8.8.8", "15169", "8.8.8.0/24", "GOOGLE, US")
    }

    fn cloudflare_record() -> AsnRecord {
        AsnRecord::new("1.1.1.1", "13335", "1.1.1.0/24", "CLOUDFLARENET, US")
    }

    fn service(resolver: MockAsnResolver, cache: MockCacheStore) -> LookupService {
        LookupService::new(Arc::new(resolver), Arc::new(cache), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_fresh_lookup_resolves_and_writes_through() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache
            .expect_get()
            .withf(|key| key == "8.8.8.8")
            .times(1)
            .returning(|_| Ok(None));

        resolver
            .expect_resolve()
            .withf(|ip| ip == "8.8.8.8")
            .times(1)
            .returning(|_| Ok(google_record()));

        cache
            .expect_set()
            .withf(|key, value, ttl| {
                key == "8.8.8.8"
                    && value.contains("\"asn\":\"15169\"")
                    && *ttl == Duration::from_secs(60)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = service(resolver, cache).lookup("8.8.8.8").await.unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.cached, 0);
        assert_eq!(result.results, vec![google_record()]);
    }

    #[tokio::test]
    async fn test_cached_lookup_skips_resolver() {
        // No resolver expectations: any call panics the test.
        let resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        let raw = serde_json::to_string(&google_record()).unwrap();
        cache
            .expect_get()
            .times(1)
            .returning(move |_| Ok(Some(raw.clone())));

        let result = service(resolver, cache).lookup("8.8.8.8").await.unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.cached, 1);
        assert_eq!(result.results, vec![google_record()]);
    }

    #[tokio::test]
    async fn test_batch_preserves_request_order() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache.expect_get().times(2).returning(|_| Ok(None));
        cache.expect_set().times(2).returning(|_, _, _| Ok(()));

        resolver.expect_resolve().times(2).returning(|ip| match ip {
            "1.1.1.1" => Ok(cloudflare_record()),
            "8.8.8.8" => Ok(google_record()),
            other => Err(AppError::validation(other)),
        });

        let result = service(resolver, cache)
            .lookup("1.1.1.1,8.8.8.8")
            .await
            .unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(result.cached, 0);
        assert_eq!(result.results, vec![cloudflare_record(), google_record()]);
    }

    #[tokio::test]
    async fn test_mixed_batch_counts_hits() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        let raw = serde_json::to_string(&cloudflare_record()).unwrap();
        cache.expect_get().times(2).returning(move |key| {
            if key == "1.1.1.1" {
                Ok(Some(raw.clone()))
            } else {
                Ok(None)
            }
        });
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(google_record()));

        let result = service(resolver, cache)
            .lookup("1.1.1.1,8.8.8.8")
            .await
            .unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(result.cached, 1);
    }

    #[tokio::test]
    async fn test_invalid_address_aborts_whole_batch() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache.expect_get().times(2).returning(|_| Ok(None));
        // The valid leading address is still written through before the
        // batch aborts; only the response is all-or-nothing.
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        resolver.expect_resolve().times(2).returning(|ip| {
            if ip == "8.8.8.8" {
                Ok(google_record())
            } else {
                Err(AppError::validation(ip))
            }
        });

        let err = service(resolver, cache)
            .lookup("8.8.8.8,not-an-ip")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "not-an-ip is not a valid IP address");
    }

    #[tokio::test]
    async fn test_cache_read_error_fails_open_to_resolver() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache
            .expect_get()
            .times(1)
            .returning(|_| Err(CacheError::OperationError("connection reset".into())));
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(google_record()));

        let result = service(resolver, cache).lookup("8.8.8.8").await.unwrap();

        assert_eq!(result.count, 1);
        assert_eq!(result.cached, 0);
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_treated_as_miss() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some("{not json".to_string())));
        cache.expect_set().times(1).returning(|_, _, _| Ok(()));

        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(google_record()));

        let result = service(resolver, cache).lookup("8.8.8.8").await.unwrap();

        assert_eq!(result.cached, 0);
        assert_eq!(result.results, vec![google_record()]);
    }

    #[tokio::test]
    async fn test_cache_write_error_does_not_fail_lookup() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache.expect_get().times(1).returning(|_| Ok(None));
        cache
            .expect_set()
            .times(1)
            .returning(|_, _, _| Err(CacheError::OperationError("read-only replica".into())));

        resolver
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(google_record()));

        let result = service(resolver, cache).lookup("8.8.8.8").await.unwrap();

        assert_eq!(result.count, 1);
    }

    #[tokio::test]
    async fn test_duplicate_addresses_processed_independently() {
        let mut resolver = MockAsnResolver::new();
        let mut cache = MockCacheStore::new();

        cache.expect_get().times(2).returning(|_| Ok(None));
        cache.expect_set().times(2).returning(|_, _, _| Ok(()));

        resolver
            .expect_resolve()
            .times(2)
            .returning(|_| Ok(google_record()));

        let result = service(resolver, cache)
            .lookup("8.8.8.8,8.8.8.8")
            .await
            .unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(result.results, vec![google_record(), google_record()]);
    }
}
