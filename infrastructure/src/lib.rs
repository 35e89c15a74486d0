//! Infrastructure layer for tmclass
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod completion;
pub mod config;
pub mod logging;
pub mod web;

#[cfg(test)]
pub(crate) mod test_http;

// Re-export commonly used types
pub use completion::{OpenAiCompletionClient, ProviderKind};
pub use config::{
    ConfigLoader, FileCompletionConfig, FileConfig, FileFetchConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use logging::JsonlClassificationLogger;
pub use web::HttpContentSource;
