//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod classification_logger;
pub mod completion_client;
pub mod content_source;
pub mod progress;
