//! Cache store layer for resolved ASN records.
//!
//! Provides a [`CacheStore`] trait with three implementations:
//! - [`RedisCache`] - Production Redis-backed store with per-key TTL
//! - [`MemoryCache`] - In-process store with `Instant`-based expiry, used in
//!   tests and redis-less runs
//! - [`NullCache`] - No-op implementation

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheStore};

#[cfg(test)]
pub use service::MockCacheStore;
