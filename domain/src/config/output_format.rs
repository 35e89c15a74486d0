//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for classification results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full formatted output including the raw completion
    Full,
    /// One line per class (default)
    #[default]
    Summary,
    /// JSON output of the result contract
    Json,
}
