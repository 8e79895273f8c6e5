//! # asnjson
//!
//! A small lookup service that maps IP addresses to their Autonomous System
//! Number (ASN) ownership records, built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear seams:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::AsnRecord`] value
//!   type and the [`domain::resolver::AsnResolver`] collaborator trait
//! - **Application Layer** ([`application`]) - The cache-aside lookup pipeline
//!   and the bounded batch memoization layer
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache store and the
//!   Team Cymru whois resolver client
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Request flow
//!
//! `GET /get/1.2.3.4,8.8.8.8` splits the path segment on commas and resolves
//! each candidate in order: the Redis store is consulted first, misses fall
//! through to the whois resolver, and fresh records are written back with a
//! configured TTL. Identical batch strings are short-circuited whole by an
//! in-process LRU so repeated requests never touch Redis or the resolver.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIS_TTL="60"
//!
//! cargo run -- --host 127.0.0.1 --port 5000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`], with command-line flags taking precedence. See the
//! [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LookupService, MemoizedLookup};
    pub use crate::domain::entities::{AsnRecord, BatchResult};
    pub use crate::domain::resolver::AsnResolver;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::CacheStore;
    pub use crate::state::AppState;
}
