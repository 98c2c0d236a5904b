//! Spinner feedback while the variation search runs

use crate::algorithm::enumerator::{SearchObserver, SearchStats};
use crate::io::configuration::{SPINNER_TICK_MS, SPINNER_UPDATE_STEPS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Drives a spinner from enumeration progress notifications
///
/// The message is refreshed every [`SPINNER_UPDATE_STEPS`] steps and whenever a
/// variation is found, so redraw cost stays flat on large searches.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Create a visible spinner, or a hidden one when `visible` is false
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar.set_message("Searching for variations");
            bar
        } else {
            ProgressBar::hidden()
        };

        Self { bar }
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn refresh(&self, stats: &SearchStats) {
        self.bar.set_message(format!(
            "Searching for variations: {} steps, {} found",
            stats.steps, stats.variations
        ));
    }
}

impl SearchObserver for SearchProgress {
    fn on_step(&mut self, stats: &SearchStats) {
        if stats.steps.is_multiple_of(SPINNER_UPDATE_STEPS) {
            self.refresh(stats);
        }
    }

    fn on_variation(&mut self, stats: &SearchStats) {
        self.refresh(stats);
    }
}
