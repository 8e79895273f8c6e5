use anyhow::Result;
use asnjson::config::Config;
use asnjson::server;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// IP-to-ASN lookup service.
#[derive(Parser)]
#[command(name = "asnjson", version, about)]
struct Cli {
    /// Server bind host
    #[arg(short = 'i', long)]
    host: Option<String>,

    /// Server bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Redis hostname
    #[arg(long)]
    redis_host: Option<String>,

    /// Redis port
    #[arg(long)]
    redis_port: Option<u16>,

    /// Redis password
    #[arg(long)]
    redis_pw: Option<String>,

    /// Seconds to cache resolved records in Redis
    #[arg(long)]
    redis_ttl: Option<u64>,

    /// Maximum number of memoized batch requests
    #[arg(long)]
    memo_capacity: Option<usize>,

    /// Increase output verbosity
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags take precedence over environment variables.
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(redis_host) = self.redis_host {
            config.redis_host = redis_host;
        }
        if let Some(redis_port) = self.redis_port {
            config.redis_port = redis_port;
        }
        if let Some(redis_pw) = self.redis_pw {
            config.redis_password = redis_pw;
        }
        if let Some(redis_ttl) = self.redis_ttl {
            config.record_ttl_seconds = redis_ttl;
        }
        if let Some(memo_capacity) = self.memo_capacity {
            config.memo_capacity = memo_capacity;
        }
        if self.verbose {
            config.verbose = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut config = Config::from_env();
    Cli::parse().apply(&mut config);
    config.validate()?;

    let default_directive = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    config.print_summary();

    server::run(config).await
}
