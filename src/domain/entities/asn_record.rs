//! ASN ownership record entity.

use serde::{Deserialize, Serialize};

/// Ownership record for a single IP address.
///
/// Produced by the resolver on a cache miss, or reconstructed by
/// deserializing a cache store value. Immutable once created; uniquely
/// identified by `ip`. The cache store value for key `ip` is the JSON
/// serialization of this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnRecord {
    /// The IP address exactly as it appeared in the batch request.
    pub ip: String,
    /// Autonomous System Number announcing the covering prefix.
    pub asn: String,
    /// BGP prefix (CIDR) the address falls inside.
    pub prefix: String,
    /// Registered name of the announcing organisation.
    pub owner: String,
}

impl AsnRecord {
    pub fn new(
        ip: impl Into<String>,
        asn: impl Into<String>,
        prefix: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            asn: asn.into(),
            prefix: prefix.into(),
            owner: owner.into(),
        }
    }
}
