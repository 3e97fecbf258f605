//! Error types for domain extraction and field access.

use thiserror::Error;

use crate::types::Field;

/// Errors raised by strict parsing, asserting accessors and configuration.
///
/// Plain parsing never returns these: a URL that cannot be split produces an
/// invalid [`ParsedResult`](crate::ParsedResult) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// Strict parsing was requested and the input did not yield a valid result.
    #[error("Invalid URL Value")]
    InvalidUrl,

    /// An asserting accessor was called on a field that is absent or empty.
    #[error("{0} not found or invalid")]
    FieldMissing(Field),

    /// A field was requested by a name outside the fixed field set.
    #[error("undefined field `{0}`")]
    UnknownField(String),

    /// The normalized input could not be parsed as a URI.
    #[error("URL parsing error: {0}")]
    UrlParse(String),

    /// The URI has no host, or the host is not a registrable DNS name.
    #[error("Host must be a valid DNS name, not an IP address")]
    HostNotDns,

    /// A custom public suffix list could not be loaded.
    #[error("Public suffix list could not be loaded: {0}")]
    Dataset(String),
}

impl From<url::ParseError> for ExtractError {
    fn from(err: url::ParseError) -> Self {
        ExtractError::UrlParse(err.to_string())
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Dataset(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ExtractError::InvalidUrl.to_string(), "Invalid URL Value");
        assert_eq!(
            ExtractError::FieldMissing(Field::Domain).to_string(),
            "domain not found or invalid"
        );
        assert_eq!(
            ExtractError::FieldMissing(Field::RootDomain).to_string(),
            "root_domain not found or invalid"
        );
        assert_eq!(
            ExtractError::UnknownField("domian".to_string()).to_string(),
            "undefined field `domian`"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ExtractError::InvalidUrl, ExtractError::InvalidUrl);
        assert_ne!(ExtractError::InvalidUrl, ExtractError::HostNotDns);
        assert_ne!(
            ExtractError::FieldMissing(Field::Tld),
            ExtractError::FieldMissing(Field::Host)
        );
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let url_error = url::ParseError::EmptyHost;
        let error: ExtractError = url_error.into();

        match error {
            ExtractError::UrlParse(_) => (),
            _ => panic!("Expected UrlParse variant"),
        }
    }
}
