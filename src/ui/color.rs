//! Color and formatting utilities for terminal output

use crate::core::ProbeOutcome;
use crate::core::constants::display;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const MAGENTA: &'static str = "\x1b[35m";

    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => env::var("TERM_PROGRAM").is_ok(),
    }
}

/// Color used for a probe outcome
pub fn outcome_color(outcome: &ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Live { .. } => Colors::GREEN,
        ProbeOutcome::NotFoundPlatform | ProbeOutcome::NotFoundApp => Colors::RED,
        ProbeOutcome::Misrouted { .. } => Colors::MAGENTA,
        ProbeOutcome::Timeout | ProbeOutcome::ConnectionFailed(_) => Colors::YELLOW,
        ProbeOutcome::OtherStatus(_) | ProbeOutcome::UnexpectedError(_) => Colors::RED,
    }
}

/// Emoji shown next to a probe outcome, or an empty string when formatting is off
pub fn outcome_emoji(outcome: &ProbeOutcome) -> &'static str {
    if !supports_formatting() {
        return "";
    }
    match outcome {
        ProbeOutcome::Live { .. } => display::SUCCESS_EMOJI,
        ProbeOutcome::NotFoundPlatform | ProbeOutcome::NotFoundApp => display::NOT_FOUND_EMOJI,
        ProbeOutcome::Misrouted { .. } => display::MISROUTED_EMOJI,
        ProbeOutcome::ConnectionFailed(_) => display::NETWORK_ERROR_EMOJI,
        ProbeOutcome::Timeout => display::TIMEOUT_EMOJI,
        ProbeOutcome::OtherStatus(_) => display::ERROR_EMOJI,
        ProbeOutcome::UnexpectedError(_) => display::OTHER_EMOJI,
    }
}
