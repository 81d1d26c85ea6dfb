//! Log sanitization utilities
//!
//! Response bodies can be large (full record lists) and API keys must not
//! appear verbatim in logs or `Debug` output.

/// Maximum number of bytes of a body kept in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a key left visible by [`mask_key`].
const KEY_VISIBLE_PREFIX: usize = 4;

/// Truncate a response body for logging, on a char boundary.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Mask a credential, keeping only a short prefix for identification.
///
/// `"1c1a3c91-4770-4ce7"` becomes `"1c1a****"`; keys no longer than the
/// prefix are masked entirely.
pub fn mask_key(key: &str) -> String {
    if key.chars().count() <= KEY_VISIBLE_PREFIX {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(KEY_VISIBLE_PREFIX).collect();
    format!("{prefix}****")
}
