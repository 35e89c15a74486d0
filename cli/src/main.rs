//! CLI entrypoint for tmclass
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tmclass_application::{BehaviorConfig, ClassifyError, ClassifyInput, ClassifyUseCase};
use tmclass_domain::OutputFormat;
use tmclass_domain::classification::request::normalize_url;
use tmclass_infrastructure::{
    ConfigLoader, FileConfig, HttpContentSource, JsonlClassificationLogger, OpenAiCompletionClient,
};
use tmclass_presentation::{Cli, ConsoleFormatter, OutputFormatter, ProgressReporter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit code for requests rejected before any I/O
const EXIT_INVALID_REQUEST: i32 = 2;
/// Exit code for fetch or completion failures
const EXIT_PIPELINE_FAILURE: i32 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = load_config(&cli)?;
    ConsoleFormatter::set_color_enabled(config.output.color);

    // Reject malformed requests before touching config-dependent adapters
    let input = ClassifyInput {
        url: cli.url.clone(),
        description: cli.description_text().map(str::to_string),
    };
    if let Err(e) = input.to_request() {
        eprint!("{}", ConsoleFormatter::format_error(&ClassifyError::from(e)));
        std::process::exit(EXIT_INVALID_REQUEST);
    }

    let mut has_errors = false;
    for issue in config.validate() {
        if issue.is_error() {
            eprintln!("config error: {}", issue.message);
            has_errors = true;
        } else {
            warn!("config: {}", issue.message);
        }
    }
    if has_errors {
        bail!("Invalid configuration. Run with --show-config to see which files were read.");
    }

    // === Dependency Injection ===
    let content_source = Arc::new(HttpContentSource::new(
        Duration::from_secs(config.fetch.timeout_seconds),
        config.fetch.user_agent.clone(),
    ));
    let client = Arc::new(OpenAiCompletionClient::from_config(&config.completion)?);
    info!(
        "Using {} model '{}' at {}",
        client.provider(),
        config.completion.model,
        client.request_url()
    );

    let mut use_case = ClassifyUseCase::new(content_source, client)
        .with_behavior(behavior_config(&config)?);

    if let Some(path) = &cli.log_file {
        match JsonlClassificationLogger::new(path) {
            Some(logger) => {
                info!("Classification log: {}", logger.path().display());
                use_case = use_case.with_logger(Arc::new(logger));
            }
            None => warn!("Classification log disabled: cannot open {}", path.display()),
        }
    }

    // === Run ===
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let result = if cli.quiet {
        use_case.execute(input).await
    } else {
        let reporter = ProgressReporter::new();
        let result = use_case.execute_with_progress(input, &reporter).await;
        reporter.finish();
        result
    };

    match result {
        Ok(result) => {
            let output = ConsoleFormatter.format(&result, format);
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            eprint!("{}", ConsoleFormatter::format_error(&e));
            let code = if e.is_caller_error() {
                EXIT_INVALID_REQUEST
            } else {
                EXIT_PIPELINE_FAILURE
            };
            std::process::exit(code);
        }
    }
}

/// Load config files (unless --no-config) and apply CLI overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    if let Some(model) = &cli.model {
        config.completion.model = model.clone();
    }
    Ok(config)
}

/// Stage bounds for the use case, backing up the adapters' own timeouts
fn behavior_config(config: &FileConfig) -> Result<BehaviorConfig> {
    let mut behavior = BehaviorConfig::with_timeout_seconds(
        config.fetch.timeout_seconds,
        config.completion.timeout_seconds,
    )
    .with_max_content_chars(config.fetch.max_content_chars);

    if let Some(reference) = &config.fetch.reference_url {
        let url = normalize_url(reference)
            .map_err(|e| anyhow!("Invalid fetch.reference_url '{}': {}", reference, e))?;
        behavior = behavior.with_reference_url(url);
    }
    Ok(behavior)
}
