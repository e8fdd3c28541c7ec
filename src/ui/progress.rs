use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::Candidate;

/// Spinner shown on stderr while a candidate is being probed
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    /// Whether a spinner can be drawn: stderr must be a terminal
    pub fn is_available() -> bool {
        atty::is(atty::Stream::Stderr)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn start_probe(&mut self, index: usize, total: usize, candidate: &Candidate) {
        if !self.enabled {
            return;
        }
        self.finish_probe();

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("[{}/{total}] Probing {candidate}", index + 1));
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    pub fn finish_probe(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish_probe();
    }
}
