//! The parsing pipeline.
//!
//! normalize → split URI → reject IP literals → split on the public suffix →
//! decode the query → build the result.

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::result::ParsedResult;
use crate::types::{DomainParts, QueryParams};
use crate::url::host::{has_valid_labels, is_ip_literal};
use crate::url::normalizer::normalize_with_scheme;
use crate::url::psl::{HostParts, SuffixSplitter};
use crate::url::query::decode_query;
use crate::url::splitter::split_uri;

/// Parses URLs and hostnames against one suffix dataset and configuration.
///
/// Holds no mutable state; one extractor can serve any number of threads.
#[derive(Debug)]
pub struct DomainExtractor {
    splitter: SuffixSplitter,
    default_scheme: String,
    max_host_len: usize,
}

impl Default for DomainExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl DomainExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            splitter: SuffixSplitter::new(config.dataset, config.allow_unlisted_suffix),
            default_scheme: config.default_scheme,
            max_host_len: config.max_host_len,
        }
    }

    /// Parse `input`. Never fails: unusable input gives an invalid result.
    pub fn parse<S: AsRef<str>>(&self, input: S) -> ParsedResult {
        self.parse_opt(Some(input))
    }

    /// Parse possibly missing input.
    pub fn parse_opt<S: AsRef<str>>(&self, input: Option<S>) -> ParsedResult {
        match self.extract(input) {
            Some(parts) => ParsedResult::new(parts),
            None => ParsedResult::invalid(),
        }
    }

    /// Parse `input`, failing with [`ExtractError::InvalidUrl`] when the result
    /// would not be valid.
    pub fn parse_strict<S: AsRef<str>>(&self, input: S) -> Result<ParsedResult, ExtractError> {
        let result = self.parse(input);
        if result.is_valid() {
            Ok(result)
        } else {
            Err(ExtractError::InvalidUrl)
        }
    }

    /// Whether `input` parses to a valid result.
    pub fn is_valid<S: AsRef<str>>(&self, input: S) -> bool {
        self.parse(input).is_valid()
    }

    /// Parse each input independently; invalid inputs give `None` in their slot.
    pub fn parse_batch<I, S>(&self, inputs: Option<I>) -> Vec<Option<ParsedResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(inputs) = inputs else {
            return Vec::new();
        };
        inputs
            .into_iter()
            .map(|input| Some(self.parse(input)).filter(ParsedResult::is_valid))
            .collect()
    }

    fn extract<S: AsRef<str>>(&self, input: Option<S>) -> Option<DomainParts> {
        let normalized = normalize_with_scheme(input, &self.default_scheme)?;

        let uri = match split_uri(&normalized) {
            Ok(uri) => uri,
            Err(err) => {
                log::debug!("Rejecting {normalized}: {err}");
                return None;
            }
        };

        if is_ip_literal(&uri.host) {
            log::debug!("Rejecting {normalized}: host {} is an IP literal", uri.host);
            return None;
        }
        if !has_valid_labels(&uri.host, self.max_host_len) {
            log::debug!("Rejecting {normalized}: host {} has invalid labels", uri.host);
            return None;
        }

        let host_parts = self.splitter.split(&uri.host)?;
        let query_params = decode_query(uri.query.as_deref());

        Some(build_parts(uri.host, host_parts, uri.path, query_params))
    }
}

/// Assemble the record, keeping `root_domain` and `host` consistent with the split.
fn build_parts(
    host: String,
    host_parts: HostParts,
    path: String,
    query_params: QueryParams,
) -> DomainParts {
    let HostParts {
        subdomain,
        domain,
        tld,
        root_domain,
    } = host_parts;

    DomainParts {
        subdomain: subdomain.filter(|s| !s.is_empty()),
        domain: Some(domain),
        tld: Some(tld),
        root_domain: Some(root_domain),
        host: Some(host),
        path,
        query_params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::psl::SuffixDataset;

    #[test]
    fn test_pipeline_valid() {
        let extractor = DomainExtractor::default();
        let result = extractor.parse("HTTPS://Blog.Example.COM/Posts?id=7");
        assert_eq!(result.host(), Some("blog.example.com"));
        assert_eq!(result.subdomain(), Some("blog"));
        assert_eq!(result.path(), "/Posts");
        assert_eq!(result.query_params()["id"].as_deref(), Some("7"));
    }

    #[test]
    fn test_pipeline_rejections() {
        let extractor = DomainExtractor::default();
        assert!(!extractor.parse("http://").is_valid());
        assert!(!extractor.parse("192.168.1.1").is_valid());
        assert!(!extractor.parse("https://[2001:db8::1]/").is_valid());
        assert!(!extractor.parse("localhost").is_valid());
        assert!(!extractor.parse("co.uk").is_valid());
        assert!(!extractor.parse_opt(None::<&str>).is_valid());
    }

    #[test]
    fn test_max_host_len() {
        let extractor = DomainExtractor::new(ExtractorConfig::default().with_max_host_len(12));
        assert!(extractor.is_valid("example.com"));
        assert!(!extractor.is_valid("www.example.com"));
    }

    #[test]
    fn test_default_scheme_does_not_change_split() {
        let extractor =
            DomainExtractor::new(ExtractorConfig::default().with_default_scheme("http"));
        let result = extractor.parse("api.example.com/v1");
        assert_eq!(result.subdomain(), Some("api"));
        assert_eq!(result.path(), "/v1");
    }

    #[test]
    fn test_custom_dataset() {
        let dataset = SuffixDataset::parse(
            "// ===BEGIN ICANN DOMAINS===\ncom\n// ===END ICANN DOMAINS===\n",
        )
        .unwrap();
        let extractor = DomainExtractor::new(ExtractorConfig::default().with_dataset(dataset));
        assert!(extractor.is_valid("example.com"));
        assert!(!extractor.is_valid("example.org"));
    }

    #[test]
    fn test_parse_batch_slots() {
        let extractor = DomainExtractor::default();
        let results = extractor.parse_batch(Some(["example.com", "", "10.0.0.1", "a.example.org"]));
        assert_eq!(results.len(), 4);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert!(results[2].is_none());
        assert_eq!(results[3].as_ref().and_then(|r| r.subdomain()), Some("a"));

        assert!(extractor.parse_batch(None::<Vec<&str>>).is_empty());
    }
}
