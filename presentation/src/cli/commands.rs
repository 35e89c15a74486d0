//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tmclass_domain::OutputFormat as DomainOutputFormat;

/// Output format for classification results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Classes with specifications, headings and the raw model answer
    Full,
    /// One line per class plus its specifications
    Summary,
    /// JSON result: {source, classifications, raw}
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Summary => DomainOutputFormat::Summary,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for tmclass
#[derive(Parser, Debug)]
#[command(name = "tmclass")]
#[command(author, version, about = "Suggest Nice Classification trademark classes for a business")]
#[command(long_about = r#"
tmclass reads a business website (or a description of the business), asks a
language model which of the 45 Nice Classification classes apply, and prints
each class with a confidence and suggested specification terms.

The completion service is configured with AZURE_AI_ENDPOINT, AZURE_AI_API_KEY
and AZURE_AI_MODEL (a .env file is read), or a [completion] config section.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./tmclass.toml        Project-level config
3. ~/.config/tmclass/config.toml   Global config

Example:
  tmclass --url example.com
  tmclass "We roast coffee beans and run two cafés"
  tmclass --url https://shop.example -o json
"#)]
pub struct Cli {
    /// Business description (same as --description)
    #[arg(value_name = "DESCRIPTION", conflicts_with = "description")]
    pub text: Option<String>,

    /// Website of the business to classify
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Free-text description of the business's goods and services
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Model or deployment to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format (default: from config, else summary)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL audit record of each classification to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Description from `--description` or the positional argument
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().or(self.text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_description() {
        let cli = Cli::try_parse_from(["tmclass", "We sell mugs"]).unwrap();
        assert_eq!(cli.description_text(), Some("We sell mugs"));
        assert!(cli.url.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_url_with_json_output() {
        let cli = Cli::try_parse_from(["tmclass", "--url", "example.com", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("example.com"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_positional_conflicts_with_flag() {
        assert!(Cli::try_parse_from(["tmclass", "a", "--description", "b"]).is_err());
    }

    #[test]
    fn test_url_and_description_parse_for_later_validation() {
        // Ambiguity is a request validation error, not a parse error
        let cli = Cli::try_parse_from(["tmclass", "-u", "example.com", "-d", "shop"]).unwrap();
        assert!(cli.url.is_some());
        assert_eq!(cli.description_text(), Some("shop"));
    }

    #[test]
    fn test_output_maps_to_domain() {
        assert_eq!(DomainOutputFormat::from(OutputFormat::Full), DomainOutputFormat::Full);
    }
}
