/// Schemes whose payload is opaque: no authority component, no path
/// splitting. Matching is case-insensitive; dispatch on the first byte
/// keeps the common miss cheap.
pub(crate) fn match_opaque_scheme(input: &str) -> Option<&'static str> {
    let bytes = input.as_bytes();
    let scheme: &'static str = match bytes.first()?.to_ascii_lowercase() {
        b'b' => "blob:",
        b'd' => "data:",
        b'j' => "javascript:",
        b'v' => "vbscript:",
        _ => return None,
    };
    bytes
        .get(..scheme.len())?
        .eq_ignore_ascii_case(scheme.as_bytes())
        .then_some(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_opaque_scheme() {
        assert_eq!(match_opaque_scheme("data:text/plain,hi"), Some("data:"));
        assert_eq!(match_opaque_scheme("DATA:text"), Some("data:"));
        assert_eq!(match_opaque_scheme("blob:uuid"), Some("blob:"));
        assert_eq!(match_opaque_scheme("javascript:void(0)"), Some("javascript:"));
        assert_eq!(match_opaque_scheme("vbscript:msgbox"), Some("vbscript:"));
        assert_eq!(match_opaque_scheme("https://x"), None);
        assert_eq!(match_opaque_scheme("dat"), None);
        assert_eq!(match_opaque_scheme(""), None);
    }
}
