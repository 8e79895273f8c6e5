//! Collaborator trait for the external ASN lookup capability.

use crate::domain::entities::AsnRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Resolves a single IP address to its ASN ownership record.
///
/// Any failure from this collaborator is input-validation failure, never a
/// transient error: a syntactically invalid address, an address no prefix
/// covers, and an upstream timeout all surface as [`AppError::Validation`].
/// Callers that need to distinguish transient faults retry at a higher layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::CymruWhoisResolver`] - Team Cymru
///   bulk-whois client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AsnResolver: Send + Sync {
    /// Resolves `ip` to an [`AsnRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the address is not a valid or
    /// resolvable IP.
    async fn resolve(&self, ip: &str) -> Result<AsnRecord, AppError>;
}
