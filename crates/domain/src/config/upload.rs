use serde::{Deserialize, Serialize};

/// Bulk upload limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Maximum number of domain names accepted in one uploaded list.
    #[serde(default = "default_max_domains")]
    pub max_domains: usize,
}

fn default_max_domains() -> usize {
    10_000
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_domains: default_max_domains(),
        }
    }
}
