use super::lookup::{Disposition, LookupOutcome};
use std::fmt;
use std::sync::Arc;

/// Placeholder the web front end expects for a genuinely empty field.
/// Two literal characters, not an empty string; rendered only at the
/// formatting boundary.
pub const EMPTY_MARKER: &str = "\"\"";

/// Client-facing security classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    Secure,
    Bogus,
    Insecure,
}

impl SecurityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityLevel::Secure => "secure",
            SecurityLevel::Bogus => "bogus",
            SecurityLevel::Insecure => "insecure",
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error field of a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The resolver returned no answer at all.
    NoData,
    /// Verbatim resolver status text (e.g. "SERVFAIL").
    Status(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::NoData => "nodata",
            ErrorCode::Status(s) => s,
        }
    }
}

/// Three-field classification derived for one queried name.
///
/// Absent fields are `None` here; the empty marker appears only when the
/// verdict is rendered to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub name: Arc<str>,
    pub error_code: Option<ErrorCode>,
    pub security_level: Option<SecurityLevel>,
    pub message: Option<String>,
}

impl Verdict {
    pub fn is_bogus(&self) -> bool {
        matches!(self.security_level, Some(SecurityLevel::Bogus))
    }

    /// Render the verdict as one comma-joined record:
    /// `<name>,<errorCode>,<securityLevel>,<message>`.
    ///
    /// No quoting or escaping is performed; a name or message containing a
    /// comma corrupts the field count. The front end relies on this exact
    /// format, so it stays as-is.
    pub fn to_line(&self) -> String {
        let error = self
            .error_code
            .as_ref()
            .map_or(EMPTY_MARKER, ErrorCode::as_str);
        let level = self
            .security_level
            .map_or(EMPTY_MARKER, |l| l.as_str());
        let message = self.message.as_deref().unwrap_or(EMPTY_MARKER);

        format!("{},{},{},{}", self.name, error, level, message)
    }
}

/// Map a resolution outcome to its client-facing verdict.
///
/// Pure and total: every disposition maps to exactly one combination of
/// error code, security level and message. The resolver status text is
/// surfaced verbatim as the error field whenever answer data exists; without
/// data the error field is always "nodata" and the status is ignored.
pub fn classify(outcome: LookupOutcome) -> Verdict {
    let LookupOutcome {
        name,
        disposition,
        status,
    } = outcome;

    let status_code = status
        .filter(|s| !s.is_empty())
        .map(ErrorCode::Status);

    match disposition {
        Disposition::NoData => Verdict {
            name,
            error_code: Some(ErrorCode::NoData),
            security_level: None,
            message: None,
        },
        Disposition::Secure => Verdict {
            name,
            error_code: status_code,
            security_level: Some(SecurityLevel::Secure),
            message: None,
        },
        Disposition::Bogus { reason } => Verdict {
            name,
            error_code: status_code,
            security_level: Some(SecurityLevel::Bogus),
            message: Some(reason).filter(|r| !r.is_empty()),
        },
        Disposition::Insecure => Verdict {
            name,
            error_code: status_code,
            security_level: Some(SecurityLevel::Insecure),
            message: None,
        },
    }
}
