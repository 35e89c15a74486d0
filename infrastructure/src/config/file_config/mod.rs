//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod completion;
mod fetch;
mod output;

pub use completion::{DEFAULT_API_VERSION, FileCompletionConfig};
pub use fetch::{DEFAULT_USER_AGENT, FileFetchConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use crate::completion::ProviderKind;
use serde::{Deserialize, Serialize};
use tmclass_domain::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub completion: FileCompletionConfig,
    /// Page fetch settings
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Completion endpoint and API key are present
    /// 2. The provider names a known wire flavour
    /// 3. Timeouts and size limits are non-zero
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Credentials
        if self.completion.endpoint().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "completion.endpoint".to_string(),
                },
                "completion.endpoint is not set (set AZURE_AI_ENDPOINT or [completion] endpoint)",
            ));
        }
        if self.completion.resolve_api_key().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "completion.api_key".to_string(),
                },
                format!(
                    "no API key: set {} or [completion] api_key",
                    self.completion.api_key_env
                ),
            ));
        }

        // 2. Provider
        if self.completion.provider.parse::<ProviderKind>().is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "completion.provider".to_string(),
                    value: self.completion.provider.clone(),
                    valid_values: ProviderKind::VALID_NAMES
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                },
                format!(
                    "completion.provider: unknown value '{}'",
                    self.completion.provider
                ),
            ));
        }

        // 3. Ranges
        let ranges = [
            ("completion.timeout_seconds", self.completion.timeout_seconds),
            (
                "completion.max_completion_tokens",
                u64::from(self.completion.max_completion_tokens),
            ),
            ("fetch.timeout_seconds", self.fetch.timeout_seconds),
            ("fetch.max_content_chars", self.fetch.max_content_chars as u64),
        ];
        for (field, value) in ranges {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                        value,
                    },
                    format!("{} cannot be 0", field),
                ));
            }
        }

        issues
    }
}
