use hickory_proto::rr::RecordType as HickoryType;
use zonecheck_domain::{RecordClass, RecordType};

/// Maps domain-layer record types and classes onto `hickory-proto` types.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryType {
        match record_type {
            RecordType::A => HickoryType::A,
            RecordType::AAAA => HickoryType::AAAA,
            RecordType::CNAME => HickoryType::CNAME,
            RecordType::MX => HickoryType::MX,
            RecordType::NS => HickoryType::NS,
            RecordType::PTR => HickoryType::PTR,
            RecordType::SOA => HickoryType::SOA,
            RecordType::SRV => HickoryType::SRV,
            RecordType::TXT => HickoryType::TXT,
            RecordType::DS => HickoryType::DS,
            RecordType::DNSKEY => HickoryType::DNSKEY,
            RecordType::CAA => HickoryType::CAA,
        }
    }

    pub fn class_to_hickory(class: RecordClass) -> hickory_proto::rr::DNSClass {
        match class {
            RecordClass::In => hickory_proto::rr::DNSClass::IN,
            RecordClass::Ch => hickory_proto::rr::DNSClass::CH,
            RecordClass::Hs => hickory_proto::rr::DNSClass::HS,
        }
    }
}
