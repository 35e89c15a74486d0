//! Console output formatter for classification results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use tmclass_application::ClassifyError;
use tmclass_domain::{ClassKind, ClassificationRecord, ClassificationResult};

/// Formats classification results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a pipeline failure with a hint on what to do next
    pub fn format_error(error: &ClassifyError) -> String {
        let hint = if error.is_caller_error() {
            "Provide exactly one of --url or a description."
        } else if error.is_retryable() {
            "This looks transient; try again shortly."
        } else {
            "Check the URL and the [completion] configuration (see --show-config)."
        };
        format!(
            "{} {} failed: {}\n{} {}\n",
            "Error:".red().bold(),
            error.stage().display_name(),
            error,
            "hint:".dimmed(),
            hint
        )
    }

    /// Format the complete result
    pub fn format_full(result: &ClassificationResult) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Nice Classification Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Source:".cyan().bold(), result.source));
        output.push_str(&format!(
            "{} {}\n",
            "Classes:".cyan().bold(),
            Self::class_list(result)
        ));

        output.push_str(&Self::section_header("Suggested Classes"));
        if result.is_empty() {
            output.push_str(&format!("\n{}\n", Self::empty_message().yellow()));
        }
        for record in &result.classifications {
            output.push_str(&format!("\n{}\n", Self::record_title(record)));
            if let Some(class) = record.nice_class()
                && !record.class_name.is_empty()
                && !record.class_name.eq_ignore_ascii_case(class.heading())
            {
                output.push_str(&format!(
                    "  {} {}\n",
                    "Heading:".dimmed(),
                    class.heading().dimmed()
                ));
            }
            for spec in &record.specifications {
                output.push_str(&format!("  * {}\n", spec));
            }
        }

        // Raw completion
        output.push_str(&Self::section_header("Model Answer"));
        if result.raw.is_empty() {
            output.push_str(&format!("\n{}\n", "(empty)".dimmed()));
        } else {
            output.push_str(&format!("\n{}\n", Self::indent(&result.raw, "  ")));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &ClassificationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One line per class, specifications indented beneath
    pub fn format_summary(result: &ClassificationResult) -> String {
        if result.is_empty() {
            return format!(
                "{}\n{}\n",
                Self::empty_message().yellow(),
                "Use --output full to see the model's answer.".dimmed()
            );
        }

        let mut output = String::new();
        for record in &result.classifications {
            output.push_str(&Self::record_title(record));
            output.push('\n');
            if !record.specifications.is_empty() {
                output.push_str(&format!("    {}\n", record.specifications.join("; ")));
            }
        }
        output
    }

    fn record_title(record: &ClassificationRecord) -> String {
        let kind = match record.kind() {
            Some(ClassKind::Goods) => "goods".green(),
            Some(ClassKind::Services) => "services".blue(),
            None => "".normal(),
        };
        format!(
            "{} {} {} [{}]",
            format!("Class {:>2}", record.class_number).cyan().bold(),
            record.display_name().bold(),
            Self::confidence(record.confidence),
            kind
        )
    }

    /// `(90%)`; the no-confidence sentinel renders as `(--%)`
    fn confidence(value: u8) -> String {
        match value {
            0 => "(--%)".dimmed().to_string(),
            v if v >= 75 => format!("({}%)", v).green().to_string(),
            v if v >= 40 => format!("({}%)", v).yellow().to_string(),
            v => format!("({}%)", v).red().to_string(),
        }
    }

    fn class_list(result: &ClassificationResult) -> String {
        let numbers = result.class_numbers();
        if numbers.is_empty() {
            return "none".to_string();
        }
        numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn empty_message() -> &'static str {
        "No Nice classes found in the model's answer."
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, result: &ClassificationResult) -> String {
        Self::format_full(result)
    }

    fn format_json(&self, result: &ClassificationResult) -> String {
        Self::format_json(result)
    }

    fn format_summary(&self, result: &ClassificationResult) -> String {
        Self::format_summary(result)
    }
}
