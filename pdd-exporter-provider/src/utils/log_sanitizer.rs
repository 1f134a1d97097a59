//! Log sanitization utilities
//!
//! Prevents sensitive data (API tokens, long TXT/DKIM payloads)
//! from being fully exposed in debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const MASK_VISIBLE_PREFIX: usize = 4;

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

/// Mask a secret (API token) for logging.
///
/// Keeps the first few characters so two tokens can be told apart;
/// secrets too short to hide anything are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let total = secret.chars().count();
    if total <= MASK_VISIBLE_PREFIX * 2 {
        return "*".repeat(total);
    }
    let prefix: String = secret.chars().take(MASK_VISIBLE_PREFIX).collect();
    format!("{prefix}{}", "*".repeat(total - MASK_VISIBLE_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // '€' is 3 bytes, so the byte limit falls inside a character
        let s = "€".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn mask_keeps_prefix() {
        assert_eq!(mask_secret("ABCDEFGHIJKLMNOP"), "ABCD************");
    }

    #[test]
    fn mask_hides_short_secret_entirely() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("12345678"), "********");
        assert_eq!(mask_secret(""), "");
    }
}
