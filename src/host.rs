use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as the host pattern sees it: ASCII `[ \t\n\x0B\f\r]` only.
/// Unicode spaces such as U+00A0 are ordinary characters.
#[inline]
fn is_blank_char(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// True for empty or whitespace-only text.
#[inline]
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Strip leading and trailing ASCII whitespace.
#[inline]
pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank_char)
}

/// Regex pattern for pulling the host out of a URL-like string.
/// Format: [scheme:][//][userinfo@]host[:port][/path][?query][#fragment]
///
/// The host group accepts any character other than the delimiters, so log
/// lines and partial URLs still yield something usable.
static HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\s)*(?:[^:/?#]+:)?(?://)?(?:[^/?#@]*@)?([^:/?#]*)")
        .expect("HOST_PATTERN: hardcoded regex is invalid")
});

/// Extract the host from a URL-like string, dropping scheme, userinfo, port,
/// path, query and fragment.
///
/// Returns `None` for blank input. The captured host may be empty (e.g. for
/// `"//:80"`).
pub fn sanitized_host(url: &str) -> Option<&str> {
    if is_blank(url) {
        return None;
    }

    HOST_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
