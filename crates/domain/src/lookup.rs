use super::RecordType;
use std::sync::Arc;

/// DNS query class. Everything the checker does runs in IN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordClass {
    #[default]
    In,
    Ch,
    Hs,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::In => "IN",
            RecordClass::Ch => "CH",
            RecordClass::Hs => "HS",
        }
    }
}

/// One resolution request (name + record type + class).
/// Uses `Arc<str>` for zero-cost cloning between orchestrator and outcome.
#[derive(Debug, Clone)]
pub struct LookupQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl LookupQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: RecordClass::In,
        }
    }
}

/// DNSSEC disposition of one resolution, as reported by the resolver client.
///
/// A tagged outcome instead of a `have_data`/`secure`/`bogus` flag triple:
/// `Secure` and `Bogus` cannot coexist, and `NoData` carries no security
/// information at all, so downstream code cannot misread stale flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// The resolver returned no answer data.
    NoData,
    /// DNSSEC validation succeeded with a verified chain.
    Secure,
    /// DNSSEC validation was attempted and failed.
    Bogus { reason: String },
    /// Answer data exists but is not DNSSEC-signed.
    Insecure,
}

/// Immutable per-lookup result produced by the resolver client and consumed
/// exactly once by the classifier. Never cached or persisted.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    /// The name as resolved (trimmed).
    pub name: Arc<str>,
    pub disposition: Disposition,
    /// Free-form resolver status text (e.g. "SERVFAIL"), meaningful mainly
    /// when answer data exists without a DNSSEC classification.
    pub status: Option<String>,
}

impl LookupOutcome {
    pub fn new(name: impl Into<Arc<str>>, disposition: Disposition) -> Self {
        Self {
            name: name.into(),
            disposition,
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
