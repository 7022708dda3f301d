use crate::compat::{String, ToString};
use crate::helpers::scheme_run_len;
use crate::parse::{parse_url, stringify_parsed_url};
use crate::query::{QueryObject, parse_query, stringify_query};

/// True when the input starts with a usable `scheme://` marker. With
/// `accept_relative`, protocol-relative inputs (`//host`) count as well.
/// A bare marker with nothing after it (`"https://"`, `"//"`) does not.
pub fn has_protocol(input: &str, accept_relative: bool) -> bool {
    has_scheme_marker(input) || (accept_relative && is_protocol_relative(input))
}

/// `scheme:` followed by a double slash (either direction, so Windows
/// inputs qualify) and at least one more character.
fn has_scheme_marker(input: &str) -> bool {
    let run = scheme_run_len(input);
    if run < 2 {
        return false;
    }
    let bytes = input.as_bytes();
    bytes.get(run) == Some(&b':')
        && matches!(bytes.get(run + 1), Some(&(b'/' | b'\\')))
        && matches!(bytes.get(run + 2), Some(&(b'/' | b'\\')))
        && bytes.len() > run + 3
}

/// `//` followed by something that is not another slash.
fn is_protocol_relative(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.first() == Some(&b'/')
        && bytes.get(1) == Some(&b'/')
        && !matches!(bytes.get(2), None | Some(&(b'/' | b'\\')))
}

/// Join URL segments with single slashes between them. Empty segments and
/// bare `"/"` segments are skipped; an empty base takes the first segment
/// as-is.
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.to_string();
    for segment in segments {
        if segment.is_empty() || *segment == "/" {
            continue;
        }
        if url.is_empty() {
            url.push_str(segment);
            continue;
        }
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(segment.trim_start_matches('/'));
    }
    url
}

/// Add a trailing slash when missing.
pub fn with_trailing_slash(input: &str) -> String {
    if input.ends_with('/') {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + 1);
    out.push_str(input);
    out.push('/');
    out
}

/// Remove one trailing slash. Empty input and bare `"/"` both stay `"/"`.
pub fn without_trailing_slash(input: &str) -> String {
    let stripped = input.strip_suffix('/').unwrap_or(input);
    if stripped.is_empty() {
        return "/".to_string();
    }
    stripped.to_string()
}

/// Merge `query` into the URL's existing query string and re-serialize.
/// Existing keys are replaced in place; new keys are appended.
pub fn with_query(input: &str, query: &QueryObject) -> String {
    let mut parsed = parse_url(input, None);
    let mut merged = parse_query(&parsed.search);
    for (key, value) in query.iter() {
        merged.insert(key, value.clone());
    }
    parsed.search = stringify_query(&merged);
    stringify_parsed_url(&parsed)
}

/// Parse the query portion of any URL-ish string.
pub fn get_query(input: &str) -> QueryObject {
    parse_query(&parse_url(input, None).search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_helpers() {
        assert_eq!(with_trailing_slash("a/b"), "a/b/");
        assert_eq!(with_trailing_slash("a/b/"), "a/b/");
        assert_eq!(without_trailing_slash("a/b/"), "a/b");
        assert_eq!(without_trailing_slash("a/b"), "a/b");
        assert_eq!(without_trailing_slash("/"), "/");
        assert_eq!(without_trailing_slash(""), "/");
    }
}
