use serde::{Deserialize, Serialize};

/// Upstream validating resolver settings.
///
/// The checker performs no DNSSEC cryptography itself; it queries a
/// validating recursive resolver and reads the AD bit and EDE options of the
/// responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Address of the validating upstream (host:port).
    #[serde(default = "default_upstream")]
    pub upstream: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_upstream() -> String {
    "9.9.9.9:53".to_string()
}

fn default_query_timeout_ms() -> u64 {
    5000
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}
