//! Pipeline stage value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A step of the classification pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Validate,
    Acquire,
    BuildPrompt,
    Complete,
    Parse,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Validate => "validate",
            PipelineStage::Acquire => "acquire",
            PipelineStage::BuildPrompt => "build_prompt",
            PipelineStage::Complete => "complete",
            PipelineStage::Parse => "parse",
        }
    }

    /// Human-readable label for progress output
    pub fn display_name(&self) -> &'static str {
        match self {
            PipelineStage::Validate => "Validating request",
            PipelineStage::Acquire => "Fetching content",
            PipelineStage::BuildPrompt => "Building prompt",
            PipelineStage::Complete => "Asking model",
            PipelineStage::Parse => "Parsing classes",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
