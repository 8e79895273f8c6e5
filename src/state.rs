use std::sync::Arc;

use crate::application::services::MemoizedLookup;
use crate::infrastructure::cache::CacheStore;

/// Shared application state injected into all handlers.
///
/// The memoized lookup service carries the whole pipeline; the cache store
/// handle is exposed separately for the administrative dump endpoint, which
/// enumerates keys directly.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<MemoizedLookup>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn new(lookup: Arc<MemoizedLookup>, cache: Arc<dyn CacheStore>) -> Self {
        Self { lookup, cache }
    }
}
