use async_trait::async_trait;
use zonecheck_domain::{DomainError, LookupOutcome, LookupQuery};

/// Port for the external DNSSEC-validating resolver client.
///
/// Implementations perform one resolution with DNSSEC validation and report
/// a structured outcome. Transport and protocol failures surface as
/// `DomainError`; they are never translated into verdicts at this layer.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve one query.
    ///
    /// `strict` is passed through from the caller; its exact semantics are
    /// owned by the implementation (see the infrastructure client). Each
    /// call must use a fresh resolution context: no state, cache or
    /// connection is shared between calls.
    async fn lookup(&self, query: &LookupQuery, strict: bool)
        -> Result<LookupOutcome, DomainError>;
}
