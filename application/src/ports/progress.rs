//! Progress notification port
//!
//! Lets the presentation layer follow the classification pipeline without
//! the use case knowing how progress is rendered.

use tmclass_domain::PipelineStage;

/// Callback for pipeline progress
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: PipelineStage);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, stage: PipelineStage, success: bool);
}

/// No-op progress notifier
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: PipelineStage) {}
    fn on_stage_complete(&self, _stage: PipelineStage, _success: bool) {}
}
