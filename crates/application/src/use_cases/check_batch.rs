use crate::ports::DnsResolver;
use std::sync::Arc;
use tracing::{debug, instrument};
use zonecheck_domain::{classify, order_batch, DomainError, LookupQuery, RecordType, Verdict};

/// Batch lookup: every name is queried as NS, strictly sequentially in
/// input order, and the rendered lines are reordered so DNSSEC failures
/// come first.
pub struct CheckBatchUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl CheckBatchUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Check an ordered list of domain names.
    ///
    /// Any caller-supplied record type is ignored; batch lookups always
    /// query NS with strict mode off. The batch orderer depends on the
    /// encounter order of the outcomes, so lookups are awaited one at a
    /// time.
    #[instrument(skip_all, fields(count = names.len()), name = "check_batch")]
    pub async fn execute(&self, names: Vec<String>) -> Result<Vec<String>, DomainError> {
        let mut verdicts: Vec<Verdict> = Vec::with_capacity(names.len());

        for name in &names {
            let query = LookupQuery::new(name.trim(), RecordType::NS);
            let outcome = self.resolver.lookup(&query, false).await?;
            verdicts.push(classify(outcome));
        }

        debug!(
            total = verdicts.len(),
            bogus = verdicts.iter().filter(|v| v.is_bogus()).count(),
            "Batch classified"
        );

        Ok(order_batch(verdicts))
    }
}
