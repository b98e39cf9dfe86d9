//! Progress reporting

use crate::diff::DiffStats;
use indicatif::{HumanBytes, ProgressBar, ProgressStyle};
use std::path::Path;

/// Spinner on stderr tracking the directory currently being compared
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter; a disabled reporter draws nothing
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(120));
        if let Ok(style) = ProgressStyle::with_template("{spinner} {pos} dirs | {msg}") {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        Self { bar }
    }

    /// Record entry into a directory pair (left-side path shown).
    pub fn enter_directory(&self, path: &Path) {
        self.bar.inc(1);
        self.bar.set_message(path.display().to_string());
    }

    /// Run `f` with the spinner cleared so stdout lines are not interleaved.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Finalize with the run totals.
    pub fn finish(&self, stats: &DiffStats) {
        self.bar.finish_with_message(format!(
            "Done: {} differences | {} file pairs | {} read",
            stats.total_verdicts(),
            stats.files_compared,
            HumanBytes(stats.bytes_compared)
        ));
    }

    /// Clear the spinner without a final message (error path).
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}
