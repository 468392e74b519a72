//! Command-line argument definition and processing.

use clap::Parser;

/// fieldwright - A terminal builder for multi-select form fields
#[derive(Parser, Debug)]
#[command(name = "fieldwright")]
#[command(version)]
#[command(about = "A terminal builder for multi-select form fields with live choice validation", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Log the payload on save instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Submit endpoint for this session (overrides settings.conf)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Validate a choices file (one choice per line) and exit
    #[arg(long, value_name = "FILE")]
    pub check: Option<String>,

    /// Default value reconciled into the checked choices (use with --check)
    #[arg(long = "default", value_name = "VALUE", default_value = "", requires = "check")]
    pub default_value: String,

    /// Sort the normalized choices alphabetically (use with --check)
    #[arg(long, requires = "check")]
    pub alpha: bool,

    /// Delete the autosaved draft and exit
    #[arg(long)]
    pub clear_draft: bool,
}

/// What: Process command-line arguments and handle early-exit flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Returns normally when the TUI should start.
///
/// Details:
/// - `--clear-draft` deletes the draft and exits.
/// - `--check` prints the validation report as JSON and exits.
pub fn process_args(args: &Args) {
    use crate::args::{check, draft};

    if args.clear_draft {
        draft::handle_clear_draft();
    }

    if let Some(path) = &args.check {
        check::handle_check(path, &args.default_value, args.alpha);
    }
}
