//! User interface and interaction
//!
//! CLI parsing for both binaries, console output, the probe spinner,
//! and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod output;
pub mod progress;

pub use cli::{AdsTxtCli, Cli, Commands, cli_to_config};
pub use completion::print_completions;
pub use output::ConsoleReporter;
pub use progress::ProgressReporter;
