//! URL component encoding for snapshot paths.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped inside a single path segment.
///
/// Matches `encodeURIComponent`: everything but alphanumerics and `-._~`
/// (plus `!*'()` which it also leaves alone).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path component.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Percent-encode every segment of `path`, keeping `/` separators literal.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-decode a URL hash. Malformed escapes are kept as-is.
pub fn decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}
