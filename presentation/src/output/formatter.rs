//! Output formatter trait

use tmclass_domain::{ClassificationResult, OutputFormat};

/// Trait for formatting classification results
pub trait OutputFormatter {
    /// Format with headings, class kinds and the raw model answer
    fn format_full(&self, result: &ClassificationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &ClassificationResult) -> String;

    /// One line per class (concise output)
    fn format_summary(&self, result: &ClassificationResult) -> String;

    /// Dispatch on `format`
    fn format(&self, result: &ClassificationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_full(result),
            OutputFormat::Summary => self.format_summary(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
