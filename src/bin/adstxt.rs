use clap::Parser;
use deployprobe::core::constants::exit_codes;
use deployprobe::publisher::rewrite_ads_txt;
use deployprobe::reporting::logging;
use deployprobe::ui::AdsTxtCli;
use deployprobe::ui::color::{Colors, colorize};

fn main() {
    let cli = AdsTxtCli::parse();
    std::process::exit(run_adstxt_logic(&cli));
}

/// Rewrite the ads.txt file and return the process exit code
pub fn run_adstxt_logic(cli: &AdsTxtCli) -> i32 {
    logging::init_logger(cli.verbose && !cli.quiet, cli.quiet);

    match rewrite_ads_txt(&cli.file, &cli.publisher_id) {
        Ok(id) => {
            if !cli.quiet {
                println!(
                    "{}",
                    colorize(
                        &format!("Updated {} with publisher {id}", cli.file.display()),
                        Colors::GREEN
                    )
                );
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            logging::log_error("Could not update ads.txt", Some(&e));
            eprintln!("Error: {e}");
            exit_codes::FAILURE
        }
    }
}
