use crate::compat::{String, ToString};
use crate::encoding::decode;
use crate::helpers::{
    normalize_backslashes, scheme_run_len, strip_drive_letter_slash, trim_leading_junk,
};
use crate::scheme::match_opaque_scheme;
use crate::utils::has_protocol;

/// Decomposition of a URL-ish string. Every section defaults to empty;
/// absent sections are empty strings, never missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercased scheme including the trailing colon (`"https:"`), or empty.
    pub protocol: String,
    /// Raw `user[:pass]` section without the trailing `@`, or empty.
    pub auth: String,
    /// Raw `hostname[:port]` section, or empty.
    pub host: String,
    /// Path section, excluding `?` and `#`.
    pub pathname: String,
    /// Query section including its leading `?`, or empty.
    pub search: String,
    /// Fragment section including its leading `#`, or empty.
    pub hash: String,
    /// Full `scheme:rest` text, set only for opaque schemes (`data:` etc.).
    pub href: Option<String>,
    /// True when the input started with `//` and carried no scheme, so the
    /// serializer can reinstate the marker instead of dropping it.
    pub protocol_relative: bool,
}

/// The three trailing sections of a path-ish string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPath {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

/// A decoded `user:pass` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAuth {
    pub username: String,
    pub password: String,
}

/// A `hostname[:port]` pair. The port stays a literal digit string to
/// preserve leading zeros; the hostname is percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHost {
    pub hostname: String,
    pub port: Option<String>,
}

impl From<ParsedPath> for ParsedUrl {
    fn from(path: ParsedPath) -> Self {
        Self {
            pathname: path.pathname,
            search: path.search,
            hash: path.hash,
            ..Self::default()
        }
    }
}

/// Parse an arbitrary URL-ish string into a [`ParsedUrl`]. Never fails:
/// input that does not look absolute or protocol-relative degrades to a
/// path-only record (or is retried with `default_proto` prepended).
pub fn parse_url(input: &str, default_proto: Option<&str>) -> ParsedUrl {
    let trimmed = trim_leading_junk(input);
    if let Some(protocol) = match_opaque_scheme(trimmed) {
        // Opaque payload: no authority, no path splitting.
        return ParsedUrl {
            protocol: protocol.to_string(),
            pathname: trimmed[protocol.len()..].to_string(),
            href: Some(trimmed.to_string()),
            ..ParsedUrl::default()
        };
    }

    if !has_protocol(input, true) {
        if let Some(proto) = default_proto {
            let mut prefixed = String::with_capacity(proto.len() + input.len());
            prefixed.push_str(proto);
            prefixed.push_str(input);
            return parse_url(&prefixed, None);
        }
        return parse_path(input).into();
    }

    let normalized = normalize_backslashes(input);
    let rest = trim_leading_junk(&normalized);

    let Some((protocol, after_marker)) = split_authority_marker(rest) else {
        return parse_path(input).into();
    };

    let (auth, host_and_path) = split_auth(after_marker);
    let (host, path) = split_host(host_and_path);
    let path = strip_drive_letter_slash(path);
    let ParsedPath {
        pathname,
        search,
        hash,
    } = parse_path(&path);

    ParsedUrl {
        protocol_relative: protocol.is_empty(),
        protocol,
        auth: auth.to_string(),
        host: host.to_string(),
        pathname,
        search,
        hash,
        href: None,
    }
}

/// Split `[scheme:]//rest`. The scheme is optional (protocol-relative
/// input); when present it is returned lowercased with its colon.
fn split_authority_marker(input: &str) -> Option<(String, &str)> {
    let run = scheme_run_len(input);
    if run >= 2 && input.as_bytes().get(run) == Some(&b':') && input[run + 1..].starts_with("//") {
        return Some((input[..=run].to_ascii_lowercase(), &input[run + 3..]));
    }
    input.strip_prefix("//").map(|rest| (String::new(), rest))
}

/// An auth section exists only when `@` appears before the first `/`.
fn split_auth(input: &str) -> (&str, &str) {
    match memchr::memchr2(b'@', b'/', input.as_bytes()) {
        Some(pos) if input.as_bytes()[pos] == b'@' && pos > 0 => {
            (&input[..pos], &input[pos + 1..])
        }
        _ => ("", input),
    }
}

/// Host runs to the first `/`, `?` or `#`; the remainder, delimiter
/// included, is path input.
fn split_host(input: &str) -> (&str, &str) {
    match memchr::memchr3(b'/', b'?', b'#', input.as_bytes()) {
        Some(pos) => (&input[..pos], &input[pos..]),
        None => (input, ""),
    }
}

/// Split a path-ish string on its first `?` and first `#`. A `#` inside
/// the query ends it; a `?` after `#` belongs to the hash.
pub fn parse_path(input: &str) -> ParsedPath {
    let bytes = input.as_bytes();
    match memchr::memchr2(b'#', b'?', bytes) {
        None => ParsedPath {
            pathname: input.to_string(),
            ..ParsedPath::default()
        },
        Some(pos) if bytes[pos] == b'#' => ParsedPath {
            pathname: input[..pos].to_string(),
            search: String::new(),
            hash: input[pos..].to_string(),
        },
        Some(pos) => {
            let after = &input[pos..];
            match memchr::memchr(b'#', after.as_bytes()) {
                Some(hash_pos) => ParsedPath {
                    pathname: input[..pos].to_string(),
                    search: after[..hash_pos].to_string(),
                    hash: after[hash_pos..].to_string(),
                },
                None => ParsedPath {
                    pathname: input[..pos].to_string(),
                    search: after.to_string(),
                    hash: String::new(),
                },
            }
        }
    }
}

/// Split `user[:pass]` on the first colon and percent-decode both halves.
/// The password is empty when no colon is present.
pub fn parse_auth(input: &str) -> ParsedAuth {
    match input.split_once(':') {
        Some((username, password)) => ParsedAuth {
            username: decode(username),
            password: decode(password),
        },
        None => ParsedAuth {
            username: decode(input),
            password: String::new(),
        },
    }
}

/// Split `hostname[:port]`. The port is the digit run following the first
/// colon; an empty run means no port.
pub fn parse_host(input: &str) -> ParsedHost {
    let bytes = input.as_bytes();
    let end = memchr::memchr2(b'/', b':', bytes).unwrap_or(bytes.len());
    let port = (bytes.get(end) == Some(&b':'))
        .then(|| {
            let digits = input[end + 1..]
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            &input[end + 1..end + 1 + digits]
        })
        .filter(|digits| !digits.is_empty())
        .map(ToString::to_string);
    ParsedHost {
        hostname: decode(&input[..end]),
        port,
    }
}

/// Reassemble a [`ParsedUrl`] by concatenation. The marker `//` is emitted
/// for any non-empty protocol, and for protocol-relative records without
/// one. Field contents are trusted as-is.
pub fn stringify_parsed_url(parsed: &ParsedUrl) -> String {
    let mut out = String::new();
    if !parsed.protocol.is_empty() || parsed.protocol_relative {
        out.push_str(&parsed.protocol);
        out.push_str("//");
    }
    if !parsed.auth.is_empty() {
        out.push_str(&parsed.auth);
        out.push('@');
    }
    out.push_str(&parsed.host);
    out.push_str(&parsed.pathname);
    if !parsed.search.is_empty() {
        if !parsed.search.starts_with('?') {
            out.push('?');
        }
        out.push_str(&parsed.search);
    }
    out.push_str(&parsed.hash);
    out
}

/// Extract the last path segment of the parsed input. In strict mode the
/// segment must look like `name.ext` (a dot with characters on both sides).
pub fn parse_filename(input: &str, strict: bool) -> Option<String> {
    let pathname = parse_url(input, None).pathname;
    let slash = pathname.rfind('/')?;
    let name = &pathname[slash + 1..];
    if name.is_empty() {
        return None;
    }
    if strict {
        let dotted = memchr::memchr_iter(b'.', name.as_bytes())
            .any(|pos| pos > 0 && pos + 1 < name.len());
        if !dotted {
            return None;
        }
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_authority_marker() {
        assert_eq!(
            split_authority_marker("https://x"),
            Some(("https:".into(), "x"))
        );
        assert_eq!(
            split_authority_marker("HTTPS://x"),
            Some(("https:".into(), "x"))
        );
        assert_eq!(split_authority_marker("//x"), Some((String::new(), "x")));
        assert_eq!(split_authority_marker("x:y"), None);
    }

    #[test]
    fn test_split_auth() {
        assert_eq!(split_auth("user:pass@host/p"), ("user:pass", "host/p"));
        assert_eq!(split_auth("host/p@q"), ("", "host/p@q"));
        assert_eq!(split_auth("@host"), ("", "@host"));
        assert_eq!(split_auth("host"), ("", "host"));
    }

    #[test]
    fn test_split_host() {
        assert_eq!(split_host("host.com/p?q"), ("host.com", "/p?q"));
        assert_eq!(split_host("host.com?q"), ("host.com", "?q"));
        assert_eq!(split_host("host.com#h"), ("host.com", "#h"));
        assert_eq!(split_host("host.com"), ("host.com", ""));
    }
}
