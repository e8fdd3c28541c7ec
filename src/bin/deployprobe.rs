use clap::{CommandFactory, Parser};
use deployprobe::config::{CliConfig, Config};
use deployprobe::core::constants::{exit_codes, output_formats};
use deployprobe::reporting::logging;
use deployprobe::ui::output;
use deployprobe::ui::{
    Cli, Commands, ConsoleReporter, ProgressReporter, cli_to_config, print_completions,
};
use deployprobe::{FindLive, ProbeReport, Prober, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_deployprobe_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::SETUP_ERROR);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(exit_codes::SUCCESS)
        }
        None => None,
    }
}

/// Probe the configured candidates and return the process exit code
pub async fn run_deployprobe_logic(cli: &Cli) -> Result<i32> {
    let cli_config = cli_to_config(cli)?;
    let config = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);

    config.validate().inspect_err(|e| {
        logging::log_error("Invalid configuration", Some(e));
    })?;

    if config.candidates.is_none() {
        logging::log_warning("No candidates given, probing the built-in list");
    }

    let candidates = config.candidate_list();
    logging::log_config_info(&config, candidates.len());
    if output_settings.should_show_config_info() {
        output::display_config_info(&config, &candidates);
    }

    let prober = Prober::from_config(&config)?;
    let mut reporter = create_console_reporter(&output_settings);
    let report = prober.find_live(&candidates, &mut reporter).await;

    output::display_summary(
        &report,
        candidates.len(),
        &output_settings.output_format,
        output_settings.quiet,
    );

    Ok(determine_exit_code(&report))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations().inspect_err(|e| {
            logging::log_error("Could not load config file from standard locations", Some(e));
        })?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn should_show_config_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false) && !quiet;
    let output_format = config.output_format().to_string();
    let show_progress = !quiet && !cli_config.no_progress;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

/// The spinner only runs in text mode with a terminal on stderr
pub fn create_console_reporter(output_settings: &OutputSettings) -> ConsoleReporter {
    let spinner = output_settings.show_progress
        && output_settings.output_format == output_formats::TEXT
        && ProgressReporter::is_available();

    ConsoleReporter::new(
        &output_settings.output_format,
        output_settings.quiet,
        spinner,
    )
}

pub fn determine_exit_code(report: &ProbeReport) -> i32 {
    if report.live().is_some() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}
