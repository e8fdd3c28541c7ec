use crate::config::Config;
use crate::core::{ProbeReport, ProbeResult};
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = log_level(verbose, quiet);

    // A logger may already be installed
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Structured logs only show in verbose mode
pub fn log_level(verbose: bool, quiet: bool) -> log::LevelFilter {
    if verbose && !quiet {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config, candidate_count: usize) {
    let timeout = config.timeout_duration().as_secs();
    let marker = config.marker_header_label();

    info!("Configuration: candidates={candidate_count}, timeout={timeout}s");
    info!(
        "Routing marker: header={marker}, no_server_value={}",
        config.no_server_value()
    );
    if let Some(ref user_agent) = config.user_agent {
        info!("User agent: {user_agent}");
    }
}

pub fn log_probe_start(candidate_count: usize) {
    info!("Probing {candidate_count} candidate URL(s)");
}

/// Log an individual probe result for debugging
pub fn log_probe_result(result: &ProbeResult) {
    let elapsed = result.elapsed.as_millis();
    if result.is_live() {
        debug!("✓ {} -> {} ({elapsed}ms)", result.candidate, result.outcome);
    } else {
        debug!(
            "✗ {} -> [{}] {} ({elapsed}ms)",
            result.candidate,
            result.outcome.tag(),
            result.outcome
        );
    }
}

pub fn log_probe_complete(report: &ProbeReport, candidate_count: usize, duration_ms: u128) {
    match report.live_candidate() {
        Some(candidate) => info!(
            "Probe complete: {candidate} is live after {}/{candidate_count} attempt(s) ({duration_ms}ms)",
            report.attempted()
        ),
        None => warn!(
            "Probe complete: none of {candidate_count} candidate(s) is live ({duration_ms}ms)"
        ),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
