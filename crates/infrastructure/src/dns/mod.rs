//! Concrete resolver client.
//!
//! Builds DNSSEC-aware queries with `hickory-proto`, exchanges them with a
//! validating upstream resolver over UDP (TCP on truncation) and maps the
//! response into a [`zonecheck_domain::LookupOutcome`]. No cryptographic
//! validation happens here; the upstream validates and this client reads the
//! AD bit and Extended DNS Error options.

pub mod client;
pub mod ede;
pub mod message_builder;
pub mod record_type_map;
pub mod transport;

pub use client::HickoryDnsClient;
pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
