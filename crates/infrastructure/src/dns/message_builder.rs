//! DNS query construction.
//!
//! Builds DNSSEC-aware query messages in wire format with `hickory-proto`:
//! EDNS0 with the DO bit so the upstream includes validation results, and a
//! controllable CD bit for the checking-disabled re-probe.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use zonecheck_domain::{DomainError, LookupQuery};

/// EDNS0 advertised UDP payload size.
const EDNS_PAYLOAD_SIZE: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive DNSSEC query and serialize it to wire format.
    ///
    /// The message carries a random ID (returned for response matching),
    /// the RD flag, EDNS0 with DO set, and the CD flag as requested.
    pub fn build_query(
        query: &LookupQuery,
        checking_disabled: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(query.name.as_ref()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(RecordTypeMapper::class_to_hickory(query.class));

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_checking_disabled(checking_disabled);
        message.add_query(question);

        let mut edns = Edns::new();
        edns.set_max_payload(EDNS_PAYLOAD_SIZE);
        edns.set_dnssec_ok(true);
        message.extensions_mut().replace(edns);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
