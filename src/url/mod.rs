//! URL processing stages.
//!
//! - input normalization and scheme defaulting
//! - URI decomposition into host, path and query
//! - host checks (IP literals, label shape)
//! - Public Suffix List (PSL) domain splitting
//! - query string decoding

pub mod host;
pub mod normalizer;
pub mod psl;
pub mod query;
pub mod splitter;

pub use self::host::{has_valid_labels, is_ip_literal, normalize_host};
pub use self::normalizer::{has_scheme, normalize_input, normalize_with_scheme};
pub use self::psl::{HostParts, SuffixDataset, SuffixSplitter};
pub use self::query::decode_query;
pub use self::splitter::{split_uri, UriParts};
