//! Progress reporting for the classification pipeline

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use tmclass_application::ProgressNotifier;
use tmclass_domain::PipelineStage;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn step(stage: PipelineStage) -> &'static str {
        match stage {
            PipelineStage::Validate => "[1/5]",
            PipelineStage::Acquire => "[2/5]",
            PipelineStage::BuildPrompt => "[3/5]",
            PipelineStage::Complete => "[4/5]",
            PipelineStage::Parse => "[5/5]",
        }
    }

    /// Clear the spinner if the pipeline ended early
    pub fn finish(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: PipelineStage) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        let pb = spinner.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        pb.set_prefix(Self::step(stage));
        pb.set_message(format!("{}...", stage.display_name()));
    }

    fn on_stage_complete(&self, stage: PipelineStage, success: bool) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if !success {
            if let Some(pb) = spinner.take() {
                pb.abandon_with_message(format!("{} {}", stage.display_name(), "failed".red()));
            }
        } else if stage == PipelineStage::Parse
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: PipelineStage) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::step(stage).dimmed(),
            stage.display_name().bold()
        );
    }

    fn on_stage_complete(&self, stage: PipelineStage, success: bool) {
        if !success {
            eprintln!("  {} {} failed", "x".red(), stage.display_name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_cover_every_stage_in_order() {
        let steps: Vec<&str> = [
            PipelineStage::Validate,
            PipelineStage::Acquire,
            PipelineStage::BuildPrompt,
            PipelineStage::Complete,
            PipelineStage::Parse,
        ]
        .into_iter()
        .map(ProgressReporter::step)
        .collect();
        assert_eq!(steps, vec!["[1/5]", "[2/5]", "[3/5]", "[4/5]", "[5/5]"]);
    }

    #[test]
    fn test_spinner_cleared_after_parse() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_start(PipelineStage::Validate);
        reporter.on_stage_complete(PipelineStage::Validate, true);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_stage_start(PipelineStage::Parse);
        reporter.on_stage_complete(PipelineStage::Parse, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_failure_abandons_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_stage_start(PipelineStage::Acquire);
        reporter.on_stage_complete(PipelineStage::Acquire, false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
