use crate::compat::{Cow, String, ToString};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

// Encode sets for the individual URL sections. Unlike the WHATWG sets these
// leave `[`, `]` and `|` literal everywhere, so bracket-notation query keys
// survive a round trip unharmed.

/// Generic percent-encode set: controls plus the unsafe ASCII characters,
/// minus `[`, `]`, `|`.
const COMMON_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Hash section: the generic set minus `{`, `}`, `^`.
const HASH_SET: &AsciiSet = &COMMON_SET.remove(b'{').remove(b'}').remove(b'^');

/// Path section: the generic set plus the path delimiters `#` and `?`.
const PATH_SET: &AsciiSet = &COMMON_SET.add(b'#').add(b'?');

/// Path params: `PATH_SET` plus `/`.
const PARAM_SET: &AsciiSet = &PATH_SET.add(b'/');

/// Query values: the generic set plus `+`, `#`, `&`, minus `` ` ``, `{`, `}`,
/// `^`. Spaces are spelled `+` (see [`encode_query_value`]).
const QUERY_VALUE_SET: &AsciiSet = &COMMON_SET
    .add(b'+')
    .add(b'#')
    .add(b'&')
    .remove(b'`')
    .remove(b'{')
    .remove(b'}')
    .remove(b'^');

/// Query keys: `QUERY_VALUE_SET` plus `=`.
const QUERY_KEY_SET: &AsciiSet = &QUERY_VALUE_SET.add(b'=');

/// Percent-encode into a fresh buffer, pushing chunks to avoid per-char writes.
fn encode_with(input: &str, encode_set: &'static AsciiSet) -> String {
    let mut out = String::with_capacity(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        out.push_str(chunk);
    }
    out
}

/// Encode characters that need to be encoded in any section of the URL.
pub fn encode(text: &str) -> String {
    encode_with(text, COMMON_SET)
}

/// Encode characters that need to be encoded in the hash section.
pub fn encode_hash(text: &str) -> String {
    encode_with(text, HASH_SET)
}

/// Encode a query value. Spaces become `+` and literal `+` becomes `%2B`,
/// per the `application/x-www-form-urlencoded` convention.
pub fn encode_query_value(text: &str) -> String {
    // The set escapes '%', so any "%20" in the output came from a space.
    encode_with(text, QUERY_VALUE_SET).replace("%20", "+")
}

/// Like [`encode_query_value`] but also encodes `=`.
pub fn encode_query_key(text: &str) -> String {
    encode_with(text, QUERY_KEY_SET).replace("%20", "+")
}

/// Encode characters that need to be encoded in the path section.
pub fn encode_path(text: &str) -> String {
    encode_with(text, PATH_SET)
}

/// Like [`encode_path`] but also encodes `/`, for use inside a single
/// path segment.
pub fn encode_param(text: &str) -> String {
    encode_with(text, PARAM_SET)
}

/// Best-effort percent-decoding. Returns the input unchanged when the
/// decoded bytes are not valid UTF-8; never fails.
pub fn decode(text: &str) -> String {
    percent_decode_str(text)
        .decode_utf8()
        .map_or_else(|_| text.to_string(), Cow::into_owned)
}

/// Decode a query value: literal `+` means space, then percent-decode.
pub fn decode_query_value(text: &str) -> String {
    decode(&text.replace('+', " "))
}
