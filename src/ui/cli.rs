// Command-line interface definitions for deployprobe and adstxt

use std::path::PathBuf;

use crate::config::CliConfig;
use crate::core::constants::{ads_txt, output_formats, timeouts};
use crate::core::error::{DeployProbeError, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "deployprobe", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Candidate URLs to probe, in order (default: config file or built-in list)
    #[arg(value_name = "URL")]
    pub candidates: Vec<String>,

    // Probe Options
    /// Request timeout in seconds (default: 10)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Probe Options"
    )]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Probe Options")]
    pub user_agent: Option<String>,

    // Routing Marker
    /// Response header the hosting platform sets (default: x-render-routing)
    #[arg(long, value_name = "HEADER", help_heading = "Routing Marker")]
    pub marker_header: Option<String>,

    /// Marker value meaning no server is bound (default: no-server)
    #[arg(long, value_name = "VALUE", help_heading = "Routing Marker")]
    pub no_server_value: Option<String>,

    // Output & Verbosity
    /// Only print the live URL, if any
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the progress spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI arguments into a CliConfig structure
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let mut cli_config = CliConfig::default();

    if let Some(timeout) = cli.timeout {
        if timeout == 0 {
            return Err(DeployProbeError::InvalidArgument(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }
        if timeout > timeouts::MAX_TIMEOUT_SECONDS {
            return Err(DeployProbeError::InvalidArgument(format!(
                "Timeout of {timeout} seconds is too large. Expected at most {} seconds.",
                timeouts::MAX_TIMEOUT_SECONDS
            )));
        }
        cli_config.timeout = Some(timeout);
    }

    if cli.candidates.iter().any(|c| c.trim().is_empty()) {
        return Err(DeployProbeError::InvalidArgument(
            "Candidate URL cannot be blank.".to_string(),
        ));
    }
    let candidates: Vec<String> = cli
        .candidates
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    if !candidates.is_empty() {
        cli_config.candidates = Some(candidates);
    }

    cli_config.user_agent = cli.user_agent.clone();
    cli_config.marker_header = cli.marker_header.clone();
    cli_config.no_server_value = cli.no_server_value.clone();

    cli_config.quiet = cli.quiet;
    cli_config.verbose = cli.verbose && !cli.quiet;
    cli_config.no_progress = cli.no_progress;
    cli_config.output_format = cli.format.clone();

    cli_config.config_file = cli.config.clone();
    cli_config.no_config = cli.no_config;

    Ok(cli_config)
}

/// Arguments of the ads.txt rewriter
#[derive(Parser, Debug)]
#[command(
    name = "adstxt",
    version,
    about = "Rewrite ads.txt with a validated AdSense publisher ID",
    long_about = None
)]
pub struct AdsTxtCli {
    /// Publisher ID, e.g. ca-pub-123456789012345
    #[arg(value_name = "PUBLISHER_ID")]
    pub publisher_id: String,

    /// ads.txt file to rewrite
    #[arg(short = 'f', long, value_name = "PATH", default_value = ads_txt::DEFAULT_PATH)]
    pub file: PathBuf,

    /// Suppress the success message
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
