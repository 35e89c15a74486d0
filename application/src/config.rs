//! Application-level configuration.
//!
//! This module provides configuration types that control how the
//! classification use case behaves, such as stage timeouts and the size of
//! the content handed to the prompt.

use std::time::Duration;
use tmclass_domain::MAX_CONTENT_CHARS;

/// Application behavior configuration.
///
/// Timeouts here bound a whole stage, on top of whatever timeout the
/// adapter applies to its own I/O. A stage that exceeds its bound aborts the
/// request before the next stage starts.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Upper bound for each fetch in the content acquisition stage.
    pub acquire_timeout: Option<Duration>,
    /// Upper bound for the completion stage.
    pub completion_timeout: Option<Duration>,
    /// Maximum characters of business text handed to the prompt.
    pub max_content_chars: usize,
    /// Optional class catalogue page embedded in the prompt.
    pub reference_url: Option<String>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            acquire_timeout: None,
            completion_timeout: None,
            max_content_chars: MAX_CONTENT_CHARS,
            reference_url: None,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with both stage timeouts specified in seconds.
    pub fn with_timeout_seconds(acquire: u64, completion: u64) -> Self {
        Self {
            acquire_timeout: Some(Duration::from_secs(acquire)),
            completion_timeout: Some(Duration::from_secs(completion)),
            ..Default::default()
        }
    }

    pub fn with_max_content_chars(mut self, max_chars: usize) -> Self {
        self.max_content_chars = max_chars;
        self
    }

    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = Some(url.into());
        self
    }
}
