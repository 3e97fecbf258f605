//! URI decomposition on top of the `url` crate.

use url::Url;

use crate::error::ExtractError;
use crate::url::host::normalize_host;

/// The raw pieces of a URI the pipeline works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriParts {
    /// Lower-cased host without a trailing root dot
    pub host: String,
    /// Path as written, empty when the input had none
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
}

/// Parse a normalized URL string into host, path and raw query.
///
/// Fails when the string is not a URI at all or has no host.
pub fn split_uri(normalized: &str) -> Result<UriParts, ExtractError> {
    let parsed = Url::parse(normalized)?;

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => normalize_host(host),
        _ => return Err(ExtractError::HostNotDns),
    };

    // The parser reports "/" for special schemes even when no path was given
    let path = if has_explicit_path(normalized) {
        parsed.path().to_string()
    } else {
        String::new()
    };

    Ok(UriParts {
        host,
        path,
        query: parsed.query().map(str::to_string),
    })
}

/// Whether anything follows the authority as a path in `scheme://authority/...`.
fn has_explicit_path(normalized: &str) -> bool {
    let Some((_, rest)) = normalized.split_once("://") else {
        return false;
    };
    // The parser skips any extra slashes before the authority
    let rest = rest.trim_start_matches(['/', '\\']);
    let authority_end = rest
        .find(|c| matches!(c, '/' | '\\' | '?' | '#'))
        .unwrap_or(rest.len());
    matches!(rest[authority_end..].chars().next(), Some('/' | '\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_complete_uri() {
        let parts = split_uri("https://API.Example.com:8443/search/Results?q=test&page=2#top").unwrap();
        assert_eq!(parts.host, "api.example.com");
        assert_eq!(parts.path, "/search/Results");
        assert_eq!(parts.query.as_deref(), Some("q=test&page=2"));
    }

    #[test]
    fn test_path_defaults_to_empty() {
        let parts = split_uri("https://example.com").unwrap();
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, None);

        let parts = split_uri("https://example.com?key=value").unwrap();
        assert_eq!(parts.path, "");
        assert_eq!(parts.query.as_deref(), Some("key=value"));

        let parts = split_uri("https://example.com/").unwrap();
        assert_eq!(parts.path, "/");
    }

    #[test]
    fn test_extra_slashes_before_authority() {
        let parts = split_uri("https:///example.com").unwrap();
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.path, "");

        let parts = split_uri("https:////example.com/docs").unwrap();
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.path, "/docs");
    }

    #[test]
    fn test_empty_query_is_kept() {
        let parts = split_uri("https://example.com/?").unwrap();
        assert_eq!(parts.query.as_deref(), Some(""));
    }

    #[test]
    fn test_trailing_root_dot_stripped() {
        let parts = split_uri("https://example.com./").unwrap();
        assert_eq!(parts.host, "example.com");
    }

    #[test]
    fn test_structural_failures() {
        assert!(matches!(split_uri("http://"), Err(ExtractError::UrlParse(_))));
        assert!(matches!(split_uri("https://exa mple.com"), Err(ExtractError::UrlParse(_))));
        assert!(split_uri("https://example.com:99999").is_err());
    }

    #[test]
    fn test_ip_hosts_are_passed_through() {
        assert_eq!(split_uri("https://192.168.1.1/").unwrap().host, "192.168.1.1");
        assert_eq!(split_uri("https://[2001:db8::1]/").unwrap().host, "[2001:db8::1]");
    }
}
