//! Log sanitization utilities
//!
//! Prevents secrets (passwords, session IDs) and large payloads (zone files,
//! record lists) from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Request parameters whose values must never reach a log line.
const SECRET_PARAMS: &[&str] = &["passwd", "_sid"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only its first two characters.
pub fn mask_secret(secret: &str) -> String {
    let visible = floor_char_boundary(secret, 2);
    if secret.len() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", &secret[..visible])
    }
}

/// Render encoded request parameters as `key=value&...` with secrets masked.
pub fn format_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            if SECRET_PARAMS.contains(&key.as_str()) {
                format!("{key}={}", mask_secret(value))
            } else {
                format!("{key}={}", truncate_for_log(value))
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
