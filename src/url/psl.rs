//! Public Suffix List integration for domain splitting.

use std::fmt;
use std::path::Path;

use psl::Psl as _;

use crate::error::ExtractError;

/// The public suffix dataset a [`SuffixSplitter`] consults.
///
/// `Embedded` is the snapshot compiled into the `psl` crate. `Custom` holds a
/// list loaded at startup, for pinning a specific list version.
#[derive(Default)]
pub enum SuffixDataset {
    #[default]
    Embedded,
    Custom(publicsuffix::List),
}

impl SuffixDataset {
    /// Parse a list in the standard `public_suffix_list.dat` format.
    pub fn parse(list: &str) -> Result<Self, ExtractError> {
        let list = list
            .parse::<publicsuffix::List>()
            .map_err(|err| ExtractError::Dataset(err.to_string()))?;
        Ok(SuffixDataset::Custom(list))
    }

    /// Load a list from a `public_suffix_list.dat` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loaded public suffix list from {}", path.display());
        Self::parse(&contents)
    }

    /// The public suffix of `host` and whether the dataset lists it.
    ///
    /// Hosts whose suffix is not listed still get their rightmost label back
    /// with `false`, per the list's implicit `*` rule.
    fn suffix_len(&self, host: &[u8]) -> Option<(usize, bool)> {
        match self {
            SuffixDataset::Embedded => psl::List
                .suffix(host)
                .map(|suffix| (suffix.as_bytes().len(), suffix.is_known())),
            SuffixDataset::Custom(list) => list
                .suffix(host)
                .map(|suffix| (suffix.as_bytes().len(), suffix.is_known())),
        }
    }
}

impl fmt::Debug for SuffixDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixDataset::Embedded => f.write_str("Embedded"),
            SuffixDataset::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A host split around its public suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// Labels left of the domain joined with dots, `None` if there are none
    pub subdomain: Option<String>,
    /// Registrable label immediately left of the tld
    pub domain: String,
    /// Public suffix, possibly multi-label
    pub tld: String,
    /// `domain.tld`
    pub root_domain: String,
}

/// Splits validated hostnames using a [`SuffixDataset`].
#[derive(Debug, Default)]
pub struct SuffixSplitter {
    dataset: SuffixDataset,
    allow_unlisted: bool,
}

impl SuffixSplitter {
    pub fn new(dataset: SuffixDataset, allow_unlisted: bool) -> Self {
        Self {
            dataset,
            allow_unlisted,
        }
    }

    /// Split a lower-cased hostname into subdomain, domain and tld.
    ///
    /// The longest matching suffix wins, so `example.co.uk` yields tld
    /// `co.uk` rather than `uk`. Returns `None` when the host has no listed
    /// suffix or when the suffix leaves no label for the domain.
    pub fn split(&self, host: &str) -> Option<HostParts> {
        let (suffix_len, known) = self.dataset.suffix_len(host.as_bytes())?;
        if !known && !self.allow_unlisted {
            log::debug!("Rejecting {host}: public suffix is not listed");
            return None;
        }

        // The suffix must be a proper suffix with at least one label before it
        if suffix_len + 2 > host.len() {
            log::debug!("Rejecting {host}: host is a bare public suffix");
            return None;
        }

        let tld = &host[host.len() - suffix_len..];
        let rest = host[..host.len() - suffix_len].strip_suffix('.')?;

        let (subdomain, domain) = match rest.rsplit_once('.') {
            Some((subdomain, domain)) => (Some(subdomain), domain),
            None => (None, rest),
        };
        if domain.is_empty() {
            return None;
        }

        let parts = HostParts {
            subdomain: subdomain.filter(|s| !s.is_empty()).map(str::to_string),
            domain: domain.to_string(),
            tld: tld.to_string(),
            root_domain: format!("{domain}.{tld}"),
        };
        log::trace!(
            "Split {host} into sub={:?} domain={} tld={}",
            parts.subdomain,
            parts.domain,
            parts.tld
        );
        Some(parts)
    }
}
