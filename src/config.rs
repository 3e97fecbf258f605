//! Extractor configuration.
//!
//! A configuration is built once, handed to [`DomainExtractor::new`](crate::DomainExtractor::new),
//! and read-only from then on.
//!
//! # Examples
//!
//! ```
//! use domain_extractor::{DomainExtractor, ExtractorConfig};
//!
//! let extractor = DomainExtractor::new(
//!     ExtractorConfig::default()
//!         .with_default_scheme("http")
//!         .with_unlisted_suffixes(true),
//! );
//! assert!(extractor.is_valid("intranet.corp"));
//! ```

use crate::url::normalizer::DEFAULT_SCHEME;
use crate::url::psl::SuffixDataset;

/// Longest host accepted, in bytes.
pub const DEFAULT_MAX_HOST_LEN: usize = 253;

/// Settings for a [`DomainExtractor`](crate::DomainExtractor).
#[derive(Debug)]
pub struct ExtractorConfig {
    /// Public suffix dataset used to split hosts.
    pub dataset: SuffixDataset,
    /// Scheme prepended to input that has none.
    pub default_scheme: String,
    /// Accept hosts whose rightmost label is not a listed suffix, treating
    /// that label as the tld.
    pub allow_unlisted_suffix: bool,
    /// Hosts longer than this are rejected before suffix lookup.
    pub max_host_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            dataset: SuffixDataset::Embedded,
            default_scheme: DEFAULT_SCHEME.to_string(),
            allow_unlisted_suffix: false,
            max_host_len: DEFAULT_MAX_HOST_LEN,
        }
    }
}

impl ExtractorConfig {
    pub fn with_dataset(mut self, dataset: SuffixDataset) -> Self {
        self.dataset = dataset;
        self
    }

    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn with_unlisted_suffixes(mut self, allow: bool) -> Self {
        self.allow_unlisted_suffix = allow;
        self
    }

    pub fn with_max_host_len(mut self, max_host_len: usize) -> Self {
        self.max_host_len = max_host_len;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert!(matches!(config.dataset, SuffixDataset::Embedded));
        assert_eq!(config.default_scheme, "https");
        assert!(!config.allow_unlisted_suffix);
        assert_eq!(config.max_host_len, 253);
    }

    #[test]
    fn test_builder_setters() {
        let config = ExtractorConfig::default()
            .with_default_scheme("http")
            .with_unlisted_suffixes(true)
            .with_max_host_len(64);
        assert_eq!(config.default_scheme, "http");
        assert!(config.allow_unlisted_suffix);
        assert_eq!(config.max_host_len, 64);
    }
}
