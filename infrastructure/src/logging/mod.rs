//! Logging infrastructure: structured classification logging.
//!
//! Provides [`JsonlClassificationLogger`], a JSONL file writer that implements
//! the [`ClassificationLogger`](tmclass_application::ClassificationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlClassificationLogger;
