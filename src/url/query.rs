//! Query string decoding.

use percent_encoding::percent_decode_str;

use crate::types::QueryParams;

/// Decode a raw query string into ordered key/value pairs.
///
/// Pairs are split on `&` and then on the first `=`. Keys without a value and
/// keys with an empty value map to `None`; pairs with an empty key are
/// dropped. Keys and values are form-decoded (`+` is a space, `%XX` escapes).
/// A malformed escape anywhere makes the whole result empty.
///
/// # Examples
///
/// ```
/// use domain_extractor::decode_query;
///
/// let params = decode_query(Some("foo=bar&flag&key="));
/// assert_eq!(params["foo"].as_deref(), Some("bar"));
/// assert_eq!(params["flag"], None);
/// assert_eq!(params["key"], None);
/// ```
pub fn decode_query(raw_query: Option<&str>) -> QueryParams {
    let Some(raw_query) = raw_query.filter(|q| !q.is_empty()) else {
        return QueryParams::new();
    };

    match try_decode_query(raw_query) {
        Some(params) => params,
        None => {
            log::debug!("Discarding query with malformed encoding: {raw_query}");
            QueryParams::new()
        }
    }
}

fn try_decode_query(raw_query: &str) -> Option<QueryParams> {
    let mut params = QueryParams::new();

    for pair in raw_query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };

        let key = decode_component(key)?;
        let value = match value {
            Some(value) => Some(decode_component(value)?),
            None => None,
        };

        if key.is_empty() {
            continue;
        }
        params.insert(key, value.filter(|v| !v.is_empty()));
    }

    Some(params)
}

/// Form-decode one key or value, failing on bad escapes or invalid UTF-8.
fn decode_component(component: &str) -> Option<String> {
    if !has_valid_escapes(component) {
        return None;
    }

    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

/// Every `%` must be followed by two hex digits.
fn has_valid_escapes(component: &str) -> bool {
    let bytes = component.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
