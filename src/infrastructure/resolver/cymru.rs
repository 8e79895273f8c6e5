//! Team Cymru bulk-whois resolver client.
//!
//! Speaks the minimal line protocol of the `whois.cymru.com` IP-to-ASN
//! mapping service: one TCP exchange per lookup, sending
//!
//! ```text
//! begin
//! verbose
//! <ip>
//! end
//! ```
//!
//! and parsing the pipe-separated verbose reply
//! `AS | IP | BGP Prefix | CC | Registry | Allocated | AS Name`.

use crate::domain::entities::AsnRecord;
use crate::domain::resolver::AsnResolver;
use crate::error::AppError;
use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// Resolver backed by the Team Cymru whois service.
///
/// Per the [`AsnResolver`] contract every failure surfaces as
/// [`AppError::Validation`]: a malformed address, an address no prefix
/// covers, a connection failure, and a timeout are all "not a valid IP
/// address" to the pipeline.
pub struct CymruWhoisResolver {
    whois_addr: String,
    timeout: Duration,
}

impl CymruWhoisResolver {
    /// Creates a resolver talking to `whois_addr` (`host:port`), with every
    /// lookup bounded by `timeout`.
    pub fn new(whois_addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            whois_addr: whois_addr.into(),
            timeout,
        }
    }

    /// One whois exchange: connect, send the bulk query, read the reply.
    async fn query(&self, ip: IpAddr) -> std::io::Result<String> {
        let mut stream = TcpStream::connect(&self.whois_addr).await?;

        let request = format!("begin\nverbose\n{}\nend\n", ip);
        stream.write_all(request.as_bytes()).await?;

        let mut response = String::new();
        stream.read_to_string(&mut response).await?;

        Ok(response)
    }
}

#[async_trait]
impl AsnResolver for CymruWhoisResolver {
    async fn resolve(&self, ip: &str) -> Result<AsnRecord, AppError> {
        let parsed: IpAddr = ip.parse().map_err(|_| AppError::validation(ip))?;

        let response = tokio::time::timeout(self.timeout, self.query(parsed))
            .await
            .map_err(|_| {
                warn!("whois lookup for {} timed out after {:?}", ip, self.timeout);
                AppError::validation(ip)
            })?
            .map_err(|e| {
                warn!("whois lookup for {} failed: {}", ip, e);
                AppError::validation(ip)
            })?;

        debug!("whois response for {}: {} bytes", ip, response.len());

        parse_verbose_reply(ip, &response).ok_or_else(|| AppError::validation(ip))
    }
}

/// Extracts the first data line of a verbose bulk-whois reply.
///
/// Returns `None` when the reply carries no data line or the service
/// reported no matching prefix (`NA` ASN).
fn parse_verbose_reply(ip: &str, response: &str) -> Option<AsnRecord> {
    for line in response.lines() {
        if line.starts_with("Bulk mode") || line.starts_with("Error") || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 7 {
            continue;
        }

        let asn = fields[0];
        if asn == "NA" {
            return None;
        }

        return Some(AsnRecord::new(ip, asn, fields[2], fields[6]));
    }

    None
}
