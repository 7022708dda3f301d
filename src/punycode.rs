use crate::compat::{String, ToString};

/// True when the label starts with the ACE prefix `xn--`, case-insensitive.
fn is_ace_label(label: &[u8]) -> bool {
    matches!(label, [b'x' | b'X', b'n' | b'N', b'-', b'-', ..])
}

/// Check whether any label of `domain` already carries the Punycode
/// `xn--` prefix.
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    is_ace_label(bytes)
        || memchr::memchr_iter(b'.', bytes).any(|pos| is_ace_label(&bytes[pos + 1..]))
}

/// IDNA `ToASCII`. Plain ASCII domains without an ACE prefix pass through
/// lowercased; a domain the converter cannot map is returned unchanged
/// rather than raising an error.
pub fn to_ascii(domain: &str) -> String {
    if domain.is_ascii() && !has_punycode(domain) {
        return domain.to_ascii_lowercase();
    }
    idna::domain_to_ascii(domain).unwrap_or_else(|_| domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_punycode() {
        assert!(has_punycode("xn--wgv71a.jp"));
        assert!(has_punycode("sub.XN--wgv71a.jp"));
        assert!(!has_punycode("example.com"));
        assert!(!has_punycode("xn"));
    }

    #[test]
    fn test_to_ascii() {
        assert_eq!(to_ascii("Example.COM"), "example.com");
        assert!(to_ascii("\u{65e5}\u{672c}.jp").starts_with("xn--"));
        assert_eq!(to_ascii("xn--wgv71a.jp"), "xn--wgv71a.jp");
        // Unmappable input passes through untouched.
        assert_eq!(to_ascii("\u{fffd}.com"), "\u{fffd}.com");
    }
}
