//! Spinner display for filesystem scans

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the aggregation pipeline scans the project tree
pub struct ScanProgress {
    spinner: ProgressBar,
}

impl ScanProgress {
    /// Create and start a spinner with a scan description
    pub fn new(target: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.set_message(format!("Scanning for {}", target));
        spinner.enable_steady_tick(Duration::from_millis(80));

        Self { spinner }
    }

    /// Clear the spinner after a successful scan
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    /// Abandon on error, leaving the last message visible
    pub fn abandon(&self) {
        self.spinner.abandon();
    }
}
