//! Core data structures shared by the parsing pipeline and the accessor.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ExtractError;

/// Decoded query parameters in the order they appeared in the URL.
///
/// Keys given without a value (`?flag`) or with an empty one (`?key=`) map to `None`.
pub type QueryParams = IndexMap<String, Option<String>>;

/// The fixed set of fields a [`ParsedResult`](crate::ParsedResult) exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Labels left of the registrable domain (api.staging)
    Subdomain,
    /// Second-level domain (example)
    Domain,
    /// Public suffix (com, co.uk)
    Tld,
    /// Domain plus public suffix (example.co.uk)
    RootDomain,
    /// Full lower-cased hostname (api.example.co.uk)
    Host,
    /// Path component, empty when absent (/docs)
    Path,
    /// Decoded query parameters
    QueryParams,
}

impl Field {
    /// Every field, in serialization order.
    pub const ALL: [Field; 7] = [
        Field::Subdomain,
        Field::Domain,
        Field::Tld,
        Field::RootDomain,
        Field::Host,
        Field::Path,
        Field::QueryParams,
    ];

    /// The snake_case name used for name-based access and serialization.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Subdomain => "subdomain",
            Field::Domain => "domain",
            Field::Tld => "tld",
            Field::RootDomain => "root_domain",
            Field::Host => "host",
            Field::Path => "path",
            Field::QueryParams => "query_params",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = ExtractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ExtractError::UnknownField(name.to_string()))
    }
}

/// A borrowed view of one field's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    /// A string field; `None` when absent.
    Text(Option<&'a str>),
    /// The query parameter map.
    Params(&'a QueryParams),
}

impl<'a> FieldValue<'a> {
    /// A value is present when it is set and non-empty.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_some_and(|s| !s.is_empty()),
            FieldValue::Params(params) => !params.is_empty(),
        }
    }

    /// The string value, if this is a string field that is set.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => *text,
            FieldValue::Params(_) => None,
        }
    }

    /// The query parameters, if this is the query field.
    pub fn as_params(&self) -> Option<&'a QueryParams> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Params(params) => Some(params),
        }
    }
}

/// The immutable record assembled by the pipeline.
///
/// An all-empty record (the `Default`) stands for a failed parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: Option<String>,
    pub domain: Option<String>,
    pub tld: Option<String>,
    pub root_domain: Option<String>,
    pub host: Option<String>,
    pub path: String,
    pub query_params: QueryParams,
}

impl DomainParts {
    /// Whether the fields that define a successful parse are all set.
    pub fn is_complete(&self) -> bool {
        self.domain.is_some() && self.tld.is_some() && self.host.is_some()
    }
}
