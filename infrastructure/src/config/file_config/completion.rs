//! Completion service configuration from TOML (`[completion]` section)

use serde::{Deserialize, Serialize};

/// Azure OpenAI API version appended as `api-version`
pub const DEFAULT_API_VERSION: &str = "2024-10-21";

/// Raw completion configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Wire flavour: "azure" (default) or "openai".
    pub provider: String,
    /// Service endpoint. For Azure only scheme and host are used.
    pub endpoint: Option<String>,
    /// Direct API key (not recommended, use an env var instead).
    pub api_key: Option<String>,
    /// Environment variable holding the API key (default: "AZURE_AI_API_KEY").
    pub api_key_env: String,
    /// Model id, or deployment name for Azure.
    pub model: String,
    /// Azure `api-version` query value.
    pub api_version: String,
    /// Upper bound on generated tokens.
    pub max_completion_tokens: u32,
    /// Per-request timeout for the completion call.
    pub timeout_seconds: u64,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            provider: "azure".to_string(),
            endpoint: None,
            api_key: None,
            api_key_env: "AZURE_AI_API_KEY".to_string(),
            model: "gpt-4o".to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_completion_tokens: 4000,
            timeout_seconds: 60,
        }
    }
}

impl FileCompletionConfig {
    /// Resolve the API key: the direct value first, then `api_key_env`.
    ///
    /// Blank values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }

    /// Endpoint with surrounding whitespace removed; `None` when blank
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }
}
