//! domain_extractor - split URLs and hostnames into their domain components
//!
//! Given a URL or a bare hostname, this crate returns the subdomain, the
//! second-level domain, the public suffix (tld), the root domain, the host,
//! the path and the decoded query parameters. Public suffixes come from the
//! Public Suffix List, so multi-label suffixes such as `co.uk` split
//! correctly.
//!
//! # Quick Start
//!
//! ```
//! use domain_extractor::{parse, parse_strict, is_valid};
//!
//! let result = parse("https://api.staging.example.com/v1?debug");
//! assert_eq!(result.subdomain(), Some("api.staging"));
//! assert_eq!(result.domain(), Some("example"));
//! assert_eq!(result.tld(), Some("com"));
//! assert_eq!(result.root_domain(), Some("example.com"));
//! assert_eq!(result.query_params()["debug"], None);
//!
//! // The scheme is optional
//! assert_eq!(parse("dashtrack.com").root_domain(), Some("dashtrack.com"));
//!
//! // IP hosts and unparseable input are invalid, never a panic
//! assert!(!is_valid("192.168.1.1"));
//! assert!(parse_strict("not-a-url").is_err());
//! ```
//!
//! # Field access
//!
//! Each field of [`ParsedResult`] has a plain accessor (`domain()`), an
//! asserting accessor (`require_domain()`) and a presence check
//! (`has_domain()`). See [`result`] for the rules.
//!
//! # Error Handling
//!
//! Parsing itself never fails. [`ExtractError`] is returned by:
//!
//! - [`parse_strict`] when the input is not a valid URL
//! - `require_*` accessors when the field is absent
//! - name-based access with a name outside the field set
//! - loading a custom suffix list

use std::sync::LazyLock;

pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::DomainExtractor;
pub use result::ParsedResult;
pub use types::{DomainParts, Field, FieldValue, QueryParams};
pub use crate::url::{decode_query, is_ip_literal, normalize_input, SuffixDataset};

pub mod config;
pub mod error;
pub mod extractor;
pub mod result;
pub mod types;
pub mod url;

/// Extractor over the embedded suffix list, built on first use.
static DEFAULT_EXTRACTOR: LazyLock<DomainExtractor> = LazyLock::new(DomainExtractor::default);

/// Parse a URL or hostname with the default configuration.
///
/// Never fails; check [`ParsedResult::is_valid`].
pub fn parse<S: AsRef<str>>(input: S) -> ParsedResult {
    DEFAULT_EXTRACTOR.parse(input)
}

/// Parse possibly missing input with the default configuration.
pub fn parse_opt<S: AsRef<str>>(input: Option<S>) -> ParsedResult {
    DEFAULT_EXTRACTOR.parse_opt(input)
}

/// Parse, failing with [`ExtractError::InvalidUrl`] if the result is not valid.
pub fn parse_strict<S: AsRef<str>>(input: S) -> Result<ParsedResult, ExtractError> {
    DEFAULT_EXTRACTOR.parse_strict(input)
}

/// Whether `input` parses to a valid result.
pub fn is_valid<S: AsRef<str>>(input: S) -> bool {
    DEFAULT_EXTRACTOR.is_valid(input)
}

/// Parse each input independently; invalid inputs yield `None`.
///
/// ```
/// use domain_extractor::parse_batch;
///
/// let results = parse_batch(Some(vec!["example.com", "not a url"]));
/// assert!(results[0].is_some());
/// assert!(results[1].is_none());
/// ```
pub fn parse_batch<I, S>(inputs: Option<I>) -> Vec<Option<ParsedResult>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_EXTRACTOR.parse_batch(inputs)
}
