//! Uploaded domain-list ingestion.
//!
//! An uploaded document is split on line breaks and then on commas; tokens
//! are trimmed and empties dropped. A configurable ceiling on the number of
//! names short-circuits the whole request before any lookup happens.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngestError {
    #[error("Domain limit exceeded, max file size is {max} domains")]
    LimitExceeded { max: usize },
}

/// Split an uploaded document into an ordered list of domain names.
pub fn parse_domain_list(input: &str, max_domains: usize) -> Result<Vec<String>, IngestError> {
    let mut names = Vec::new();

    for line in input.lines() {
        for token in line.split(',') {
            let name = token.trim();
            if name.is_empty() {
                continue;
            }
            if names.len() >= max_domains {
                return Err(IngestError::LimitExceeded { max: max_domains });
            }
            names.push(name.to_string());
        }
    }

    Ok(names)
}
