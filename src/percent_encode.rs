use crate::compat::{String, ToString, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode};

/// Query component percent-encode set.
/// Everything except ASCII alphanumerics and the RFC 3986 unreserved marks `-._~`,
/// so `/`, `&`, `;`, `=` and `+` are always escaped. Non-ASCII bytes are always escaped.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode a key that has no value (`?flag`). Space becomes `%20`.
pub fn encode_key(key: &[u8]) -> String {
    percent_encode(key, COMPONENT_SET).to_string()
}

/// Write form-encoded `key=value` into buffer. Space becomes `+`.
pub fn encode_pair_into(buffer: &mut String, key: &[u8], value: &[u8]) {
    buffer.reserve(key.len() + value.len() + 1);
    form_encode_into(buffer, key);
    buffer.push('=');
    form_encode_into(buffer, value);
}

fn form_encode_into(buffer: &mut String, input: &[u8]) {
    // Each escaped byte comes out as its own "%XX" chunk
    for chunk in percent_encode(input, COMPONENT_SET) {
        if chunk == "%20" {
            buffer.push('+');
        } else {
            buffer.push_str(chunk);
        }
    }
}

/// Decode a raw query component to bytes: `+` is a space, then percent-decoding.
///
/// Decoding is lossless. Invalid escapes (`%zz`, a trailing `%`) are kept as
/// literal bytes and escapes that are not UTF-8 survive as the raw bytes, so
/// `encode_pair_into` reproduces them.
pub fn form_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'+', bytes).is_none() {
        return percent_decode(bytes).collect();
    }

    let replaced: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&replaced).collect()
}
