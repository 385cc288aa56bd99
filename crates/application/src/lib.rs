//! Zonecheck Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::DnsResolver;
pub use use_cases::{CheckBatchUseCase, CheckDomainUseCase};
