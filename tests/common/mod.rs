#![allow(dead_code)]

use asnjson::api::handlers::{cache_dump_handler, index_handler, lookup_handler, ping_handler};
use asnjson::application::services::{LookupService, MemoizedLookup};
use asnjson::domain::entities::AsnRecord;
use asnjson::domain::resolver::AsnResolver;
use asnjson::error::AppError;
use asnjson::infrastructure::cache::{CacheError, CacheResult, CacheStore};
use asnjson::state::AppState;
use async_trait::async_trait;
use axum::{Router, routing::get};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Resolver double backed by a fixed table of records.
///
/// Unknown addresses fail validation, mirroring the production contract.
/// Counts calls so tests can prove the cache and memo layers short-circuit.
pub struct StubResolver {
    records: HashMap<String, AsnRecord>,
    calls: AtomicUsize,
}

impl StubResolver {
    pub fn new(records: impl IntoIterator<Item = AsnRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.ip.clone(), record))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AsnResolver for StubResolver {
    async fn resolve(&self, ip: &str) -> Result<AsnRecord, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(ip)
            .cloned()
            .ok_or_else(|| AppError::validation(ip))
    }
}

/// Cache store double where every operation fails.
pub struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::OperationError("connection refused".into()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::OperationError("connection refused".into()))
    }

    async fn scan_keys(&self) -> CacheResult<Vec<String>> {
        Err(CacheError::OperationError("connection refused".into()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn google_record() -> AsnRecord {
    AsnRecord::new("8.8.8.8", "15169", "8.8.8.0/24", "GOOGLE, US")
}

pub fn cloudflare_record() -> AsnRecord {
    AsnRecord::new("1.1.1.1", "13335", "1.1.1.0/24", "CLOUDFLARENET, US")
}

pub fn quad9_record() -> AsnRecord {
    AsnRecord::new("9.9.9.9", "19281", "9.9.9.0/24", "QUAD9-AS-1, CH")
}

pub fn sample_records() -> Vec<AsnRecord> {
    vec![google_record(), cloudflare_record(), quad9_record()]
}

/// Builds application state over the given collaborators.
pub fn create_test_state(
    resolver: Arc<StubResolver>,
    cache: Arc<dyn CacheStore>,
    record_ttl: Duration,
    memo_capacity: usize,
) -> AppState {
    let pipeline = LookupService::new(resolver, cache.clone(), record_ttl);
    let lookup = Arc::new(MemoizedLookup::new(
        pipeline,
        NonZeroUsize::new(memo_capacity).unwrap(),
    ));
    AppState::new(lookup, cache)
}

/// Router with all four endpoints, without the outer normalize-path wrapper
/// so it plugs straight into `TestServer`.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/get/{ip}", get(lookup_handler))
        .route("/cache", get(cache_dump_handler))
        .route("/ping", get(ping_handler))
        .route("/", get(index_handler))
        .with_state(state)
}
