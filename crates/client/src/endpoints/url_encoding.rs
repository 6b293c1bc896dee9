//! URL encoding utilities for constructing safe API paths.
//!
//! Tokens and account names supplied by callers are interpolated into paths such as
//! `/reports/{report}/runs/{run}`. Without percent-encoding, a stray `/`, `?` or `#`
//! in a caller-supplied value would change which resource is addressed.
//!
//! # Example
//!
//! ```
//! use mode_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("abc/def");
//! assert_eq!(encoded, "abc%2Fdef");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// RFC 3986 section 3.3 reserved characters plus `%` (double-encoding) and `/`
/// (path traversal).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use mode_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("c3f9a8b1e2d4"), "c3f9a8b1e2d4");
/// assert_eq!(encode_path_segment("my space"), "my%20space");
/// assert_eq!(encode_path_segment("50%"), "50%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
