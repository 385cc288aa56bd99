use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonecheck_domain::{classify, DomainError, LookupQuery, RecordType};

/// Single-name lookup: one resolution, one rendered line, no ordering.
pub struct CheckDomainUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckDomainUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Check one domain name with an optional record-type token.
    ///
    /// An absent or unrecognised token falls back to NS. The lookup always
    /// requests DNSSEC validation and runs in strict mode.
    #[instrument(skip(self), name = "check_domain")]
    pub async fn execute(
        &self,
        name: &str,
        type_token: Option<&str>,
    ) -> Result<String, DomainError> {
        let record_type = RecordType::from_token(type_token);
        let query = LookupQuery::new(name.trim(), record_type);

        debug!(name = %query.name, record_type = %record_type, "Checking domain");

        let outcome = self.resolver.lookup(&query, true).await?;
        Ok(classify(outcome).to_line())
    }
}
