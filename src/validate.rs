//! Input sanitization shared by every generator.
//!
//! Callers feed this crate from untrusted sources (sliders, stored block
//! attributes, REST payloads). Every function here is total: bad input maps
//! to a clamped value, a documented default, or the empty-string sentinel.
//! Nothing in this module returns `Result` or panics.

/// Maximum accepted length for animation/gradient identifiers.
pub const MAX_IDENTIFIER_LEN: usize = 50;

/// Separator heights the host is allowed to store.
pub const ALLOWED_HEIGHTS: [&str; 6] = ["50px", "75px", "100px", "125px", "150px", "200px"];

/// Clamp `value` into `[min, max]`, substituting `default` for NaN/infinite
/// input. Numeric attributes fall back to a domain default, never to zero.
pub fn clamp_number(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if !value.is_finite() {
        return default;
    }
    value.clamp(min, max)
}

/// Validate an identifier destined for generated markup.
///
/// The value is truncated to `max_len` characters and must then match
/// `[A-Za-z0-9_-]+`. Anything else returns `""`, the universal invalid
/// sentinel for identifiers.
pub fn validate_identifier(value: &str, max_len: usize) -> String {
    let truncated: String = value.chars().take(max_len).collect();
    if truncated.is_empty() {
        return String::new();
    }
    if truncated
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        truncated
    } else {
        String::new()
    }
}

/// Map a stored height attribute onto the allow-list, defaulting to `100px`.
pub fn sanitize_height(value: &str) -> &'static str {
    ALLOWED_HEIGHTS
        .iter()
        .find(|h| **h == value)
        .copied()
        .unwrap_or("100px")
}
