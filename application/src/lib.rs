//! Application layer for tmclass
//!
//! This crate contains the classification use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    classification_logger::{ClassificationEvent, ClassificationLogger, NoClassificationLogger},
    completion_client::{CompletionClient, CompletionError},
    content_source::{AcquisitionError, ContentSource},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::acquire_content::ContentAcquirer;
pub use use_cases::classify::{ClassifyError, ClassifyInput, ClassifyUseCase};
