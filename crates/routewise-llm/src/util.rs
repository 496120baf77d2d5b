//! Shared helpers for gateway clients

/// Minimum key length to display partial key
const MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY: usize = 8;

/// Number of characters to show at start/end of masked key
const KEY_MASK_VISIBLE_CHARS: usize = 4;

/// Longest provider error message passed through to callers
const MAX_ERROR_LEN: usize = 300;

/// Mask API key for safe display in logs
///
/// Shows first 4 and last 4 characters for keys longer than 8 characters,
/// otherwise shows "****".
///
/// # Examples
/// ```
/// use routewise_llm::util::mask_api_key;
/// assert_eq!(mask_api_key("sk-1234567890abcdef"), "sk-1...cdef");
/// assert_eq!(mask_api_key("short"), "****");
/// ```
#[must_use]
pub fn mask_api_key(key: &str) -> String {
    if key.len() <= MIN_KEY_LENGTH_FOR_PARTIAL_DISPLAY || !key.is_ascii() {
        return "****".to_string();
    }
    format!(
        "{}...{}",
        &key[..KEY_MASK_VISIBLE_CHARS],
        &key[key.len() - KEY_MASK_VISIBLE_CHARS..]
    )
}

/// Truncate a string to at most `max_bytes` without splitting a character
#[must_use]
pub fn truncate_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Sanitize a provider error message before it reaches the caller
///
/// Credential problems and quota errors collapse to fixed messages so that
/// echoed keys never leak; anything else is truncated.
#[must_use]
pub fn sanitize_api_error(error: &str) -> String {
    let lower = error.to_lowercase();

    if lower.contains("api key")
        || lower.contains("api_key")
        || lower.contains("apikey")
        || lower.contains("unauthorized")
        || lower.contains("authentication")
    {
        return "API authentication error. Please check your API key configuration.".to_string();
    }

    if lower.contains("rate limit") || lower.contains("quota") {
        return "API rate limit exceeded. Please try again later.".to_string();
    }

    if error.len() > MAX_ERROR_LEN {
        format!("{}...(truncated)", truncate_safe(error, MAX_ERROR_LEN))
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key_long() {
        let masked = mask_api_key("sk-or-1234567890abcdefghij");
        assert_eq!(masked, "sk-o...ghij");
        assert!(!masked.contains("567890"));
    }

    #[test]
    fn test_mask_api_key_short() {
        assert_eq!(mask_api_key("short"), "****");
        assert_eq!(mask_api_key("12345678"), "****");
        assert_eq!(mask_api_key(""), "****");
    }

    #[test]
    fn test_sanitize_auth_error() {
        assert_eq!(
            sanitize_api_error("Invalid API key provided: sk-abc"),
            "API authentication error. Please check your API key configuration."
        );
    }

    #[test]
    fn test_sanitize_rate_limit() {
        assert_eq!(
            sanitize_api_error("Rate limit reached for requests"),
            "API rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn test_sanitize_truncates_long_message() {
        let long = "x".repeat(500);
        let sanitized = sanitize_api_error(&long);
        assert!(sanitized.ends_with("...(truncated)"));
        assert_eq!(sanitized.len(), 300 + "...(truncated)".len());
    }

    #[test]
    fn test_truncate_safe_char_boundary() {
        let s = "héllo";
        assert_eq!(truncate_safe(s, 2), "h");
        assert_eq!(truncate_safe(s, 10), s);
    }
}
