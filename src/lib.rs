#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod helpers;
mod scheme;

mod encoding;
mod parse;
mod punycode;
mod query;
mod utils;

// Public API
pub use encoding::{
    decode, decode_query_value, encode, encode_hash, encode_param, encode_path, encode_query_key,
    encode_query_value,
};
pub use parse::{
    ParsedAuth, ParsedHost, ParsedPath, ParsedUrl, parse_auth, parse_filename, parse_host,
    parse_path, parse_url, stringify_parsed_url,
};
pub use punycode::{has_punycode, to_ascii};
pub use query::{QueryObject, QueryValue, encode_query_item, parse_query, stringify_query};
pub use utils::{
    get_query, has_protocol, join_url, with_query, with_trailing_slash, without_trailing_slash,
};
