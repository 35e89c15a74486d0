//! Acquired content value object

use crate::util::truncate_chars;
use serde::{Deserialize, Serialize};

/// Maximum characters of business text handed to the prompt
pub const MAX_CONTENT_CHARS: usize = 12_000;

/// Text reduced from the request's source, bounded in size (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcquiredContent {
    source_label: String,
    text: String,
}

impl AcquiredContent {
    /// Create content truncated to [`MAX_CONTENT_CHARS`].
    pub fn new(source_label: impl Into<String>, text: &str) -> Self {
        Self::with_limit(source_label, text, MAX_CONTENT_CHARS)
    }

    /// Create content truncated to `max_chars`. Truncation is silent.
    pub fn with_limit(source_label: impl Into<String>, text: &str, max_chars: usize) -> Self {
        Self {
            source_label: source_label.into(),
            text: truncate_chars(text, max_chars).to_string(),
        }
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_unchanged() {
        let content = AcquiredContent::new("description", "We sell mugs");
        assert_eq!(content.text(), "We sell mugs");
        assert_eq!(content.source_label(), "description");
    }

    #[test]
    fn test_content_at_limit_unchanged() {
        let text = "a".repeat(MAX_CONTENT_CHARS);
        let content = AcquiredContent::new("description", &text);
        assert_eq!(content.text(), text);
    }

    #[test]
    fn test_long_content_truncated_to_exact_length() {
        let text = "é".repeat(MAX_CONTENT_CHARS + 50);
        let content = AcquiredContent::new("https://example.com", &text);
        assert_eq!(content.text().chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn test_custom_limit() {
        let content = AcquiredContent::with_limit("x", "abcdef", 4);
        assert_eq!(content.text(), "abcd");
    }
}
