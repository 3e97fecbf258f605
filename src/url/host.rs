//! Host checks run before suffix splitting.

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use regex::Regex;

/// Four dot-separated segments, each 0-255.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9]|0[0-9]{1,2})\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9]|0[0-9]{1,2})$")
        .expect("IPv4 pattern is valid")
});

/// Maximum length of a single DNS label in bytes.
const MAX_LABEL_LEN: usize = 63;

/// Whether `host` is an IPv4 or IPv6 literal rather than a name.
///
/// Dispatches on content first: hosts containing a `.` are tested as IPv4,
/// hosts containing `:` or `[` as IPv6, everything else returns `false`
/// without running either check. IPv6 literals may be bracketed and may end
/// in a dotted quad (`::ffff:192.168.1.1`).
pub fn is_ip_literal(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }

    if host.contains('.') && IPV4_PATTERN.is_match(host) {
        return true;
    }
    if host.contains(':') || host.contains('[') {
        let inner = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        return inner.parse::<Ipv6Addr>().is_ok();
    }
    false
}

/// Lower-case a host and drop a single trailing root dot.
pub fn normalize_host(host: &str) -> String {
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_ascii_lowercase()
}

/// Check that a host is made of non-empty labels of at most 63 bytes and
/// does not exceed `max_len` bytes overall.
pub fn has_valid_labels(host: &str, max_len: usize) -> bool {
    if host.is_empty() || host.len() > max_len {
        return false;
    }

    host.split('.')
        .all(|label| !label.is_empty() && label.len() <= MAX_LABEL_LEN)
}
