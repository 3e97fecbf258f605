//! Input normalization ahead of URI parsing.

/// Scheme used when the input does not carry one.
pub const DEFAULT_SCHEME: &str = "https";

/// Trim `input` and make sure it starts with a URI scheme.
///
/// Returns `None` for missing or blank input. Input that already starts with
/// `scheme://` is returned as is, anything else gets `https://` prepended.
pub fn normalize_input<S: AsRef<str>>(input: Option<S>) -> Option<String> {
    normalize_with_scheme(input, DEFAULT_SCHEME)
}

/// Like [`normalize_input`], prepending `scheme://` to scheme-less input.
pub fn normalize_with_scheme<S: AsRef<str>>(input: Option<S>, scheme: &str) -> Option<String> {
    let input = input?;
    let trimmed = input.as_ref().trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_scheme(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{scheme}://{trimmed}"))
    }
}

/// Whether `input` starts with `letter (letter | digit | + | - | .)* "://"`.
pub fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
