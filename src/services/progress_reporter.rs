//! Single-slot progress indicator for long-running pipeline steps.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const PREFIX: &str = "[create-vitron]";

/// How progress is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterMode {
    /// Animated spinner on an attached terminal.
    Spinner,
    /// Line-based messages for CI logs and pipes.
    Plain,
    /// No output.
    Silent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Idle,
    Active,
    Done,
}

/// Outcome of the most recently finished step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed,
}

enum Slot {
    Idle,
    Active { message: String, spinner: Option<ProgressBar> },
    Done { message: String, outcome: StepOutcome },
}

/// At most one step is active at a time; starting a new step finishes the
/// previous one as succeeded.
pub struct ProgressReporter {
    mode: ReporterMode,
    slot: Slot,
}

impl ProgressReporter {
    pub fn new(mode: ReporterMode) -> Self {
        Self { mode, slot: Slot::Idle }
    }

    /// Spinner on a terminal, plain lines otherwise.
    pub fn for_terminal(interactive: bool) -> Self {
        Self::new(if interactive { ReporterMode::Spinner } else { ReporterMode::Plain })
    }

    pub fn mode(&self) -> ReporterMode {
        self.mode
    }

    pub fn phase(&self) -> ProgressPhase {
        match self.slot {
            Slot::Idle => ProgressPhase::Idle,
            Slot::Active { .. } => ProgressPhase::Active,
            Slot::Done { .. } => ProgressPhase::Done,
        }
    }

    /// Message of the active or last finished step.
    pub fn message(&self) -> Option<&str> {
        match &self.slot {
            Slot::Idle => None,
            Slot::Active { message, .. } | Slot::Done { message, .. } => Some(message),
        }
    }

    pub fn last_outcome(&self) -> Option<StepOutcome> {
        match self.slot {
            Slot::Done { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn start(&mut self, message: impl Into<String>) {
        if self.phase() == ProgressPhase::Active {
            self.finish(StepOutcome::Succeeded);
        }

        let message = message.into();
        log::debug!("step started: {}", message);
        let spinner = match self.mode {
            ReporterMode::Spinner => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::with_template("{spinner:.red} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.set_message(style(&message).yellow().bold().to_string());
                spinner.enable_steady_tick(Duration::from_millis(80));
                Some(spinner)
            }
            ReporterMode::Plain => {
                println!("{} {}", style(PREFIX).cyan(), message);
                None
            }
            ReporterMode::Silent => None,
        };
        self.slot = Slot::Active { message, spinner };
    }

    /// Mark the active step succeeded. No-op when nothing is active.
    pub fn succeed(&mut self) {
        self.finish(StepOutcome::Succeeded);
    }

    /// Mark the active step failed. No-op when nothing is active.
    pub fn fail(&mut self) {
        self.finish(StepOutcome::Failed);
    }

    fn finish(&mut self, outcome: StepOutcome) {
        if self.phase() != ProgressPhase::Active {
            return;
        }
        let Slot::Active { message, spinner } = std::mem::replace(&mut self.slot, Slot::Idle) else {
            return;
        };

        let symbol = match outcome {
            StepOutcome::Succeeded => style("✔").green(),
            StepOutcome::Failed => style("✖").red(),
        };
        match (self.mode, spinner) {
            (ReporterMode::Spinner, Some(spinner)) => {
                spinner.set_style(
                    ProgressStyle::with_template("{msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                spinner.finish_with_message(format!("{} {}", symbol, message));
            }
            (ReporterMode::Plain, _) => println!("{} {} {}", style(PREFIX).cyan(), symbol, message),
            _ => {}
        }

        log::debug!("step finished ({:?}): {}", outcome, message);
        self.slot = Slot::Done { message, outcome };
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Slot::Active { spinner: Some(spinner), .. } = &self.slot {
            spinner.abandon();
        }
    }
}
