//! HTTP server initialization and runtime setup.
//!
//! Wires the cache store, resolver client, and lookup services together and
//! runs the Axum server until shutdown.

use crate::application::services::{LookupService, MemoizedLookup};
use crate::config::Config;
use crate::infrastructure::cache::{CacheStore, RedisCache};
use crate::infrastructure::resolver::CymruWhoisResolver;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis cache store (PING-validated)
/// - Whois resolver client
/// - Lookup pipeline and memoization layer
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the Redis connection or the server bind fails.
/// Both are fatal: the service exits non-zero instead of running without
/// its store.
pub async fn run(config: Config) -> Result<()> {
    let cache: Arc<dyn CacheStore> = Arc::new(
        RedisCache::connect(&config.redis_url())
            .await
            .with_context(|| {
                format!(
                    "Unable to connect to redis on {}:{}",
                    config.redis_host, config.redis_port
                )
            })?,
    );

    let resolver = Arc::new(CymruWhoisResolver::new(
        config.whois_host.clone(),
        config.lookup_timeout(),
    ));

    let pipeline = LookupService::new(resolver, cache.clone(), config.record_ttl());

    let memo_capacity =
        NonZeroUsize::new(config.memo_capacity).context("MEMO_CAPACITY must be at least 1")?;
    let lookup = Arc::new(MemoizedLookup::new(pipeline, memo_capacity));

    let state = AppState::new(lookup, cache);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr()))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to start server on {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
