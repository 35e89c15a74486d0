//! Fetch configuration from TOML (`[fetch]` section)

use serde::{Deserialize, Serialize};
use tmclass_domain::MAX_CONTENT_CHARS;

/// Browser-like agent string; some sites refuse unknown clients
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Raw page-fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Per-request timeout for page fetches (default: 10)
    pub timeout_seconds: u64,
    /// User-Agent header sent with page fetches
    pub user_agent: String,
    /// Maximum characters of page text handed to the prompt
    pub max_content_chars: usize,
    /// Optional class catalogue page embedded in every prompt
    pub reference_url: Option<String>,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_content_chars: MAX_CONTENT_CHARS,
            reference_url: None,
        }
    }
}
