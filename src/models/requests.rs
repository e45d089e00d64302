//! Request validation for the sharing service API
//!
//! `POST /api/anchors` carries the anchor key as the raw UTF-8 request body.

use crate::cache::MAX_ANCHOR_KEY_SIZE;

/// Validates an uploaded anchor key.
///
/// Over HTTP the route's body limit rejects oversized uploads first.
///
/// Returns an error message if validation fails, None if valid.
pub fn validate_anchor_key(anchor_key: &str) -> Option<String> {
    if anchor_key.trim().is_empty() {
        return Some("Anchor key cannot be empty".to_string());
    }
    if anchor_key.len() > MAX_ANCHOR_KEY_SIZE {
        return Some(format!(
            "Anchor key exceeds maximum size of {} bytes",
            MAX_ANCHOR_KEY_SIZE
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_key() {
        assert!(validate_anchor_key("").is_some());
    }

    #[test]
    fn test_validate_whitespace_key() {
        assert!(validate_anchor_key("  \t\r\n ").is_some());
    }

    #[test]
    fn test_validate_oversized_key() {
        let key = "x".repeat(MAX_ANCHOR_KEY_SIZE + 1);
        let message = validate_anchor_key(&key).unwrap();
        assert!(message.contains("maximum size"));
    }

    #[test]
    fn test_validate_valid_key() {
        assert!(validate_anchor_key("xyz").is_none());
        // Surrounding whitespace is kept, only all-blank bodies are rejected
        assert!(validate_anchor_key("  padded anchor  ").is_none());
    }
}
