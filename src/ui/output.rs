//! Output formatting and display logic for deployprobe

use crate::config::Config;
use crate::core::constants::output_formats;
use crate::core::{Candidate, ProbeReport, ProbeResult};
use crate::probe::ProbeListener;
use crate::ui::color::{Colors, colorize, outcome_color, outcome_emoji};
use crate::ui::progress::ProgressReporter;

/// Steps printed when no candidate is live
pub const REMEDIATION_STEPS: [&str; 3] = [
    "Check the hosting dashboard for the service and its current status",
    "Confirm the latest deployment finished successfully",
    "Recreate the service if it no longer exists",
];

/// Collapse a body preview onto a single line
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One line describing the outcome of a single probe
pub fn format_status_line(index: usize, total: usize, result: &ProbeResult, format: &str) -> String {
    let position = format!("[{}/{total}]", index + 1);

    if format == output_formats::MINIMAL {
        return format!("{position} {} - {}", result.candidate, result.outcome);
    }

    let emoji = outcome_emoji(&result.outcome);
    let outcome = colorize(&result.outcome.to_string(), outcome_color(&result.outcome));
    let elapsed = colorize(
        &format!("({}ms)", result.elapsed.as_millis()),
        Colors::DIM,
    );

    if emoji.is_empty() {
        format!("{position} {} - {outcome} {elapsed}", result.candidate)
    } else {
        format!("{position} {emoji} {} - {outcome} {elapsed}", result.candidate)
    }
}

/// Final summary lines for a probe run
pub fn format_summary(report: &ProbeReport, total: usize, format: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let minimal = format == output_formats::MINIMAL;

    if let Some(live) = report.live() {
        let headline = format!("Live deployment found: {}", live.candidate);
        if minimal {
            lines.push(headline);
        } else {
            lines.push(String::new());
            lines.push(colorize(
                &format!("{}{headline}{}", Colors::BOLD, Colors::RESET),
                Colors::GREEN,
            ));
        }
        if let Some(preview) = report.preview() {
            let preview = single_line(preview);
            if !preview.is_empty() {
                lines.push(format!("Response preview: {preview}"));
            }
        }
        return lines;
    }

    let headline = format!("No live deployment found ({total} candidate(s) tried)");
    if minimal {
        lines.push(headline);
    } else {
        lines.push(String::new());
        lines.push(colorize(
            &format!("{}{headline}{}", Colors::BOLD, Colors::RESET),
            Colors::RED,
        ));
    }

    lines.push("Next steps:".to_string());
    for (i, step) in REMEDIATION_STEPS.iter().enumerate() {
        lines.push(format!("   {}. {step}", i + 1));
    }
    lines
}

/// Print the summary, or just the live URL when quiet
pub fn display_summary(report: &ProbeReport, total: usize, format: &str, quiet: bool) {
    if quiet {
        if let Some(candidate) = report.live_candidate() {
            println!("{candidate}");
        }
        return;
    }

    for line in format_summary(report, total, format) {
        println!("{line}");
    }
}

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config, candidates: &[Candidate]) {
    let label = |text: &str| {
        colorize(
            &format!("{}{text}{}", Colors::BOLD, Colors::RESET),
            Colors::BRIGHT_CYAN,
        )
    };

    println!(
        "{}: {}",
        label("Using timeout (seconds)"),
        colorize(
            &config.timeout_duration().as_secs().to_string(),
            Colors::BRIGHT_WHITE
        )
    );
    println!(
        "{}: {}",
        label("Candidates"),
        colorize(&candidates.len().to_string(), Colors::BRIGHT_WHITE)
    );
    println!(
        "{}: {}",
        label("Routing marker"),
        colorize(
            &format!("{} = {}", config.marker_header_label(), config.no_server_value()),
            Colors::BRIGHT_WHITE
        )
    );
    println!();
}

/// Prints one status line per probe, with an optional spinner in between
pub struct ConsoleReporter {
    format: String,
    quiet: bool,
    progress: ProgressReporter,
}

impl ConsoleReporter {
    pub fn new(format: &str, quiet: bool, show_progress: bool) -> Self {
        Self {
            format: format.to_string(),
            quiet,
            progress: ProgressReporter::new(show_progress),
        }
    }

    pub fn shows_progress(&self) -> bool {
        self.progress.is_enabled()
    }
}

impl ProbeListener for ConsoleReporter {
    fn on_probe_start(&mut self, index: usize, total: usize, candidate: &Candidate) {
        self.progress.start_probe(index, total, candidate);
    }

    fn on_probe_result(&mut self, index: usize, total: usize, result: &ProbeResult) {
        self.progress.finish_probe();
        if !self.quiet {
            println!("{}", format_status_line(index, total, result, &self.format));
        }
    }
}
