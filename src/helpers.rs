use crate::compat::{Cow, String};

/// Strip the leading whitespace and NUL bytes the parser ignores before
/// scheme detection.
pub(crate) fn trim_leading_junk(input: &str) -> &str {
    input.trim_start_matches(|c: char| c.is_whitespace() || c == '\0')
}

/// Replace backslashes with forward slashes (Windows-path compatibility).
/// Returns a Cow to avoid allocation when the input is already clean.
pub(crate) fn normalize_backslashes(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\\', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace('\\', "/"))
}

/// Remove the first slash sitting directly before a Windows drive letter,
/// so "/C:/Users" becomes "C:/Users". Later occurrences are left alone.
pub(crate) fn strip_drive_letter_slash(path: &str) -> Cow<'_, str> {
    let bytes = path.as_bytes();
    for pos in memchr::memchr_iter(b'/', bytes) {
        if bytes.get(pos + 1).is_some_and(u8::is_ascii_alphabetic)
            && bytes.get(pos + 2) == Some(&b':')
        {
            let mut out = String::with_capacity(path.len() - 1);
            out.push_str(&path[..pos]);
            out.push_str(&path[pos + 1..]);
            return Cow::Owned(out);
        }
    }
    Cow::Borrowed(path)
}

/// Length in bytes of the leading scheme-shaped run: ASCII alphanumerics,
/// `_`, `+`, `.`, `-`.
pub(crate) fn scheme_run_len(input: &str) -> usize {
    input
        .bytes()
        .take_while(|&b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'+' | b'.' | b'-'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_leading_junk() {
        assert_eq!(trim_leading_junk("  \t\0https://x"), "https://x");
        assert_eq!(trim_leading_junk("https://x"), "https://x");
        assert_eq!(trim_leading_junk("  "), "");
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize_backslashes("a\\b\\c"), "a/b/c");
        assert!(matches!(normalize_backslashes("a/b"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_drive_letter_slash() {
        assert_eq!(strip_drive_letter_slash("/C:/Users"), "C:/Users");
        assert_eq!(strip_drive_letter_slash("/path/C:/x"), "/pathC:/x");
        assert_eq!(strip_drive_letter_slash("/no/drive"), "/no/drive");
        assert_eq!(strip_drive_letter_slash(""), "");
    }

    #[test]
    fn test_scheme_run_len() {
        assert_eq!(scheme_run_len("https://x"), 5);
        assert_eq!(scheme_run_len("git+ssh://x"), 7);
        assert_eq!(scheme_run_len("//x"), 0);
    }
}
