//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, overridden by command-line
//! flags, and validated before the server starts.
//!
//! ## Variables
//!
//! | Variable | Flag | Default | Meaning |
//! |---|---|---|---|
//! | `IP` | `--host` | `127.0.0.1` | Server bind host |
//! | `PORT` | `--port` | `5000` | Server bind port |
//! | `REDIS_HOST` | `--redis-host` | `redis` | Redis hostname |
//! | `REDIS_PORT` | `--redis-port` | `6379` | Redis port |
//! | `REDIS_PW` | `--redis-pw` | empty | Redis password |
//! | `REDIS_TTL` | `--redis-ttl` | `60` | Record TTL in seconds |
//! | `REDIS_URL` | - | unset | Full connection URL, overrides components |
//! | `MEMO_CAPACITY` | `--memo-capacity` | `32` | Memoized batch strings |
//! | `WHOIS_HOST` | - | `whois.cymru.com:43` | Upstream whois service |
//! | `LOOKUP_TIMEOUT_SECONDS` | - | `10` | Bound on each upstream call |
//!
//! All variables have defaults; nothing is required.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: String,
    /// Full Redis URL; takes priority over the component fields when set.
    pub redis_url: Option<String>,

    /// TTL (seconds) applied to each cached record at write time.
    pub record_ttl_seconds: u64,
    /// Maximum number of distinct batch strings held by the memoization
    /// layer.
    pub memo_capacity: usize,

    /// `host:port` of the upstream whois service.
    pub whois_host: String,
    /// Bound (seconds) on each upstream resolver call.
    pub lookup_timeout_seconds: u64,

    /// When true, the default log directive is `debug` instead of `info`.
    pub verbose: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_parsed("PORT", 5000),
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| "redis".to_string()),
            redis_port: env_parsed("REDIS_PORT", 6379),
            redis_password: env::var("REDIS_PW").unwrap_or_default(),
            redis_url: env::var("REDIS_URL").ok(),
            record_ttl_seconds: env_parsed("REDIS_TTL", 60),
            memo_capacity: env_parsed("MEMO_CAPACITY", 32),
            whois_host: env::var("WHOIS_HOST").unwrap_or_else(|_| "whois.cymru.com:43".to_string()),
            lookup_timeout_seconds: env_parsed("LOOKUP_TIMEOUT_SECONDS", 10),
            verbose: false,
        }
    }

    /// The address the HTTP server binds.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The Redis connection URL.
    ///
    /// Priority:
    /// 1. `REDIS_URL` if provided
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PW`
    pub fn redis_url(&self) -> String {
        if let Some(url) = &self.redis_url {
            return url.clone();
        }

        // Empty password means no authentication
        if self.redis_password.is_empty() {
            format!("redis://{}:{}/0", self.redis_host, self.redis_port)
        } else {
            format!(
                "redis://:{}@{}:{}/0",
                self.redis_password, self.redis_host, self.redis_port
            )
        }
    }

    pub fn record_ttl(&self) -> Duration {
        Duration::from_secs(self.record_ttl_seconds)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_seconds)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `record_ttl_seconds` or `lookup_timeout_seconds` is 0
    /// - `memo_capacity` is 0
    /// - `whois_host` is not in `host:port` form
    /// - `redis_url` (if set) has an unknown scheme
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be non-zero");
        }

        if self.record_ttl_seconds == 0 {
            anyhow::bail!("REDIS_TTL must be greater than 0");
        }

        if self.memo_capacity == 0 {
            anyhow::bail!("MEMO_CAPACITY must be at least 1");
        }

        if !self.whois_host.contains(':') {
            anyhow::bail!(
                "WHOIS_HOST must be in format 'host:port', got '{}'",
                self.whois_host
            );
        }

        if self.lookup_timeout_seconds == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_SECONDS must be greater than 0");
        }

        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Redis: {}", mask_connection_string(&self.redis_url()));
        tracing::info!("  Record TTL: {}s", self.record_ttl_seconds);
        tracing::info!("  Memo capacity: {}", self.memo_capacity);
        tracing::info!("  Whois host: {}", self.whois_host);
        tracing::info!("  Lookup timeout: {}s", self.lookup_timeout_seconds);
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces the password with `***` in URLs like
/// `redis://:password@host:port/db` -> `redis://:***@host:port/db`.
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}
