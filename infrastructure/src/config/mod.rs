//! Configuration file loading for tmclass
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AZURE_AI_ENDPOINT` / `AZURE_AI_API_KEY` / `AZURE_AI_MODEL` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tmclass.toml` or `./.tmclass.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tmclass/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileCompletionConfig, FileConfig, FileFetchConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
