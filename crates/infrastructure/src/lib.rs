//! Zonecheck Infrastructure Layer
pub mod dns;

pub use dns::HickoryDnsClient;
