//! Zonecheck Domain Layer
pub mod config;
pub mod errors;
pub mod lookup;
pub mod record_type;
pub mod report;
pub mod verdict;

pub use config::{Config, ConfigError};
pub use errors::DomainError;
pub use lookup::{Disposition, LookupOutcome, LookupQuery, RecordClass};
pub use record_type::RecordType;
pub use report::order_batch;
pub use verdict::{classify, ErrorCode, SecurityLevel, Verdict, EMPTY_MARKER};
