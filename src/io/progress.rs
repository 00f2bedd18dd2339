//! Spinner reporting search progress on the terminal

use crate::algorithm::budget::{SearchBudget, SearchStats};
use crate::algorithm::executor::SearchOutcome;
use crate::io::configuration::{PROGRESS_REFRESH_NODES, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Search observer that refreshes a spinner every few thousand nodes
///
/// Acts as a budget that never aborts, so it can be chained with real limits.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a visible spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message("searching");
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Create a spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Current spinner message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Update the message from the latest counters
    pub fn observe(&self, stats: &SearchStats) {
        if stats.nodes % PROGRESS_REFRESH_NODES == 1 {
            self.bar.set_message(format!(
                "searching: {} nodes, {} placements, {} rollbacks",
                stats.nodes, stats.placements, stats.rollbacks
            ));
        }
    }

    /// Stop the spinner with a summary of the outcome
    pub fn finish(&self, outcome: &SearchOutcome, stats: &SearchStats) {
        let verdict = match outcome {
            SearchOutcome::Solved(_) => "solved",
            SearchOutcome::NoSolution => "no solution",
            SearchOutcome::Aborted => "search aborted",
        };
        self.bar
            .finish_with_message(format!("{verdict} after {} nodes", stats.nodes));
    }
}

impl SearchBudget for SearchProgress {
    fn should_abort(&mut self, stats: &SearchStats) -> bool {
        self.observe(stats);
        false
    }
}
