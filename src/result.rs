//! The consumer-facing parse result.
//!
//! Every field can be read three ways:
//!
//! - `field()` returns the value or a default and never fails
//! - `require_field()` returns the value or [`ExtractError::FieldMissing`]
//! - `has_field()` reports whether `require_field()` would succeed
//!
//! A value counts as present when it is set and, for strings and the query
//! map, non-empty.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ExtractError;
use crate::types::{DomainParts, Field, FieldValue, QueryParams};

/// The immutable outcome of parsing one URL or hostname.
///
/// # Examples
///
/// ```
/// use domain_extractor::parse;
///
/// let result = parse("https://shop.example.co.uk/cart?item=42");
/// assert!(result.is_valid());
/// assert_eq!(result.subdomain(), Some("shop"));
/// assert_eq!(result.root_domain(), Some("example.co.uk"));
/// assert_eq!(result.path(), "/cart");
///
/// let missing = parse("not-a-url");
/// assert!(!missing.has_domain());
/// assert_eq!(
///     missing.require_domain().unwrap_err().to_string(),
///     "domain not found or invalid"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResult {
    parts: DomainParts,
}

macro_rules! text_accessors {
    ($($field:ident => $variant:ident, $require:ident, $has:ident;)*) => {
        $(
            #[doc = concat!("The `", stringify!($field), "` value, if any.")]
            pub fn $field(&self) -> Option<&str> {
                self.parts.$field.as_deref()
            }

            #[doc = concat!("The `", stringify!($field), "` value, or `FieldMissing` when absent.")]
            pub fn $require(&self) -> Result<&str, ExtractError> {
                self.$field()
                    .filter(|value| !value.is_empty())
                    .ok_or(ExtractError::FieldMissing(Field::$variant))
            }

            #[doc = concat!("Whether `", stringify!($field), "` is present and non-empty.")]
            pub fn $has(&self) -> bool {
                self.$require().is_ok()
            }
        )*
    };
}

impl ParsedResult {
    pub(crate) fn new(parts: DomainParts) -> Self {
        Self { parts }
    }

    /// An invalid result with every field at its default.
    pub fn invalid() -> Self {
        Self::default()
    }

    text_accessors! {
        subdomain => Subdomain, require_subdomain, has_subdomain;
        domain => Domain, require_domain, has_domain;
        tld => Tld, require_tld, has_tld;
        root_domain => RootDomain, require_root_domain, has_root_domain;
        host => Host, require_host, has_host;
    }

    /// The path, empty when the input had none.
    pub fn path(&self) -> &str {
        &self.parts.path
    }

    pub fn require_path(&self) -> Result<&str, ExtractError> {
        Some(self.path())
            .filter(|path| !path.is_empty())
            .ok_or(ExtractError::FieldMissing(Field::Path))
    }

    pub fn has_path(&self) -> bool {
        !self.parts.path.is_empty()
    }

    /// Decoded query parameters in input order, empty when there are none.
    pub fn query_params(&self) -> &QueryParams {
        &self.parts.query_params
    }

    pub fn require_query_params(&self) -> Result<&QueryParams, ExtractError> {
        Some(self.query_params())
            .filter(|params| !params.is_empty())
            .ok_or(ExtractError::FieldMissing(Field::QueryParams))
    }

    pub fn has_query_params(&self) -> bool {
        !self.parts.query_params.is_empty()
    }

    /// Whether the parse produced a domain, tld and host.
    pub fn is_valid(&self) -> bool {
        self.parts.is_complete()
    }

    /// Whether the subdomain is exactly `www`.
    pub fn is_www_subdomain(&self) -> bool {
        self.subdomain() == Some("www")
    }

    /// Plain access to any field.
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Subdomain => FieldValue::Text(self.subdomain()),
            Field::Domain => FieldValue::Text(self.domain()),
            Field::Tld => FieldValue::Text(self.tld()),
            Field::RootDomain => FieldValue::Text(self.root_domain()),
            Field::Host => FieldValue::Text(self.host()),
            Field::Path => FieldValue::Text(Some(self.path())),
            Field::QueryParams => FieldValue::Params(self.query_params()),
        }
    }

    /// Asserting access to any field.
    pub fn require(&self, field: Field) -> Result<FieldValue<'_>, ExtractError> {
        let value = self.get(field);
        if value.is_present() {
            Ok(value)
        } else {
            Err(ExtractError::FieldMissing(field))
        }
    }

    /// Presence check for any field.
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_present()
    }

    /// Plain access by field name, for map-style call sites.
    ///
    /// Names outside the field set are rejected with
    /// [`ExtractError::UnknownField`] rather than read as absent.
    pub fn get_by_name(&self, name: &str) -> Result<FieldValue<'_>, ExtractError> {
        Ok(self.get(name.parse()?))
    }

    /// Every field keyed by name, in a fixed order.
    ///
    /// Invalid results map to an empty map.
    pub fn to_map(&self) -> IndexMap<&'static str, FieldValue<'_>> {
        if !self.is_valid() {
            return IndexMap::new();
        }
        Field::ALL
            .into_iter()
            .map(|field| (field.name(), self.get(field)))
            .collect()
    }

    /// The underlying record.
    pub fn parts(&self) -> &DomainParts {
        &self.parts
    }
}

impl Serialize for ParsedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.to_map();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in &fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
