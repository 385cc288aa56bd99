#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use zonecheck_application::ports::DnsResolver;
use zonecheck_domain::{Disposition, DomainError, LookupOutcome, LookupQuery};

/// Scripted resolver for use-case tests.
///
/// Records every `(name, record_type, strict)` triple it is asked to
/// resolve, so tests can assert on query construction as well as on the
/// returned lines.
#[derive(Clone)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, Disposition>>>,
    statuses: Arc<RwLock<HashMap<String, String>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<RwLock<Vec<RecordedCall>>>,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub name: String,
    pub record_type: String,
    pub strict: bool,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            statuses: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_disposition(&self, name: &str, disposition: Disposition) {
        self.responses
            .write()
            .await
            .insert(name.to_string(), disposition);
    }

    pub async fn set_status(&self, name: &str, status: &str) {
        self.statuses
            .write()
            .await
            .insert(name.to_string(), status.to_string());
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn lookup(
        &self,
        query: &LookupQuery,
        strict: bool,
    ) -> Result<LookupOutcome, DomainError> {
        self.calls.write().await.push(RecordedCall {
            name: query.name.to_string(),
            record_type: query.record_type.as_str().to_string(),
            strict,
        });

        if *self.should_fail.read().await {
            return Err(DomainError::TransportError(
                "mock transport failure".to_string(),
            ));
        }

        let disposition = self
            .responses
            .read()
            .await
            .get(query.name.as_ref())
            .cloned()
            .unwrap_or(Disposition::Insecure);

        let mut outcome = LookupOutcome::new(query.name.clone(), disposition);
        if let Some(status) = self.statuses.read().await.get(query.name.as_ref()) {
            outcome = outcome.with_status(status.clone());
        }

        Ok(outcome)
    }
}
