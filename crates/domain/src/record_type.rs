use std::fmt;

/// DNS record types the check endpoints accept as a query-type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    PTR,
    SOA,
    SRV,
    TXT,
    DS,
    DNSKEY,
    CAA,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::TXT => "TXT",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::CAA => "CAA",
        }
    }

    /// Resolve a caller-supplied type token.
    ///
    /// An absent or unrecognised token falls back to NS, the delegation
    /// record type the checker defaults to. Matching is case-insensitive.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return RecordType::NS;
        };

        match token.trim().to_ascii_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "NS" => RecordType::NS,
            "PTR" => RecordType::PTR,
            "SOA" => RecordType::SOA,
            "SRV" => RecordType::SRV,
            "TXT" => RecordType::TXT,
            "DS" => RecordType::DS,
            "DNSKEY" => RecordType::DNSKEY,
            "CAA" => RecordType::CAA,
            _ => RecordType::NS,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
