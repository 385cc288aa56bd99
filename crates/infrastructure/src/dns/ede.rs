//! Extended DNS Errors (RFC 8914).
//!
//! A validating upstream answers SERVFAIL for bogus names; the EDE option
//! in the OPT record says why. This module pulls the option payload out of
//! the EDNS section and turns DNSSEC-related info codes into the
//! human-readable reason carried on a bogus verdict.

use hickory_proto::op::Edns;
use hickory_proto::rr::rdata::opt::EdnsOption;

/// EDE option code in the OPT record.
const EDE_OPTION_CODE: u16 = 15;

/// Decoded EDE payload: a 16-bit info code plus optional UTF-8 extra text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedError {
    pub info_code: u16,
    pub extra_text: Option<String>,
}

impl ExtendedError {
    /// Wire format: 2-byte info code, rest is extra text.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 2 {
            return None;
        }

        let info_code = u16::from_be_bytes([data[0], data[1]]);
        let text = String::from_utf8_lossy(&data[2..]);
        let text = text.trim_end_matches('\0').trim();

        Some(Self {
            info_code,
            extra_text: (!text.is_empty()).then(|| text.to_string()),
        })
    }

    /// RFC 8914 codes that indicate a DNSSEC validation failure, as
    /// opposed to operational conditions like stale answers or lame
    /// delegations.
    pub fn is_dnssec_failure(&self) -> bool {
        matches!(self.info_code, 1 | 2 | 5..=12)
    }

    /// RFC 8914 purpose text for the info code.
    pub fn purpose(&self) -> &'static str {
        match self.info_code {
            0 => "Other Error",
            1 => "Unsupported DNSKEY Algorithm",
            2 => "Unsupported DS Digest Type",
            3 => "Stale Answer",
            4 => "Forged Answer",
            5 => "DNSSEC Indeterminate",
            6 => "DNSSEC Bogus",
            7 => "Signature Expired",
            8 => "Signature Not Yet Valid",
            9 => "DNSKEY Missing",
            10 => "RRSIGs Missing",
            11 => "No Zone Key Bit Set",
            12 => "NSEC Missing",
            _ => "Unrecognized Error",
        }
    }

    /// Purpose text plus any resolver-supplied detail.
    pub fn reason(&self) -> String {
        match &self.extra_text {
            Some(text) => format!("{}: {}", self.purpose(), text),
            None => self.purpose().to_string(),
        }
    }
}

/// Extract the reason text when the EDNS section carries a DNSSEC-related
/// extended error. Non-DNSSEC EDE codes and absent options yield `None`.
pub fn dnssec_failure_reason(edns: &Edns) -> Option<String> {
    // Look the option up by its numeric code rather than by EdnsCode
    // variant, so the match does not depend on how the library classifies
    // code 15.
    let (_, option) = edns
        .options()
        .as_ref()
        .iter()
        .find(|(code, _)| u16::from(*code) == EDE_OPTION_CODE)?;

    let EdnsOption::Unknown(_, data) = option else {
        return None;
    };

    let ede = ExtendedError::parse(data)?;
    ede.is_dnssec_failure().then(|| ede.reason())
}
