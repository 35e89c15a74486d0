//! Port for structured classification logging.
//!
//! Defines the [`ClassificationLogger`] trait for recording one audit trail
//! per request (request accepted, model answer, parsed result or failure).
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while this port captures the raw completion
//! and the parsed records in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured classification event.
pub struct ClassificationEvent {
    /// Event type identifier (e.g., "classification_started", "completion_received").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ClassificationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging classification events.
///
/// `log` is synchronous and infallible; a logger that cannot write drops
/// the event.
pub trait ClassificationLogger: Send + Sync {
    fn log(&self, event: ClassificationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoClassificationLogger;

impl ClassificationLogger for NoClassificationLogger {
    fn log(&self, _event: ClassificationEvent) {}
}
