//! Command-line interface for running a search and printing its results

use crate::algorithm::dispatcher::solve_with_observer;
use crate::algorithm::state::SearchReport;
use crate::io::configuration::{
    Configuration, DEFAULT_BOARD_SIZE, PROGRAM_ABOUT, PROGRAM_EPILOG, PROGRAM_NAME,
    parse_board_size,
};
use crate::io::error::Result;
use crate::io::progress::WorkerProgress;
use crate::io::render::{write_report, write_version};
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME)]
#[command(author, version, disable_version_flag = true)]
#[command(about = PROGRAM_ABOUT, after_help = PROGRAM_EPILOG)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Size of the board (default is 8 for the Eight Queens puzzle)
    #[arg(value_name = "BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE, value_parser = board_size_arg)]
    pub board_size: usize,

    /// Enable verbose output - show the actual boards
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the worker progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Show program's version number and exit
    #[arg(short = 'V', long)]
    pub version: bool,
}

fn board_size_arg(value: &str) -> std::result::Result<usize, String> {
    parse_board_size(value).map_err(|error| error.to_string())
}

impl Cli {
    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated search configuration for these arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is zero
    pub fn configuration(&self) -> Result<Configuration> {
        Configuration::new(self.board_size, self.verbose)
    }
}

/// Process exit status for an argument parsing failure
///
/// Help requests succeed; every other parse failure is a usage error and
/// exits with status 1.
pub fn parse_error_exit_code(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Usage line to print ahead of a parse error that does not carry one
///
/// Rejected board sizes are reported without the usage line clap attaches
/// to other argument errors. Returns `None` for help output and for errors
/// that already include it.
pub fn missing_usage(error: &clap::Error) -> Option<String> {
    if parse_error_exit_code(error) == 0 || error.render().to_string().contains("Usage:") {
        return None;
    }

    Some(Cli::command().render_usage().to_string())
}

/// Runs one search from parsed arguments and writes the results
pub struct SolveRunner {
    cli: Cli,
    progress: WorkerProgress,
}

impl SolveRunner {
    /// Create a runner, with a visible progress bar unless `--quiet` was given
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            WorkerProgress::new()
        } else {
            WorkerProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Arguments this runner was built from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Solve the configured board and render the report to `out`
    ///
    /// Nothing is written until every worker has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a worker fails,
    /// or writing to `out` fails
    pub fn run<W: Write>(&self, out: &mut W) -> Result<SearchReport> {
        let config = self.cli.configuration()?;
        let report = solve_with_observer(&config, &self.progress)?;

        write_report(out, &report, config.verbose())?;
        out.flush()?;

        Ok(report)
    }

    /// Print the version for `--version`, otherwise [`run`](Self::run) the search
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails or writing to `out` fails
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<Option<SearchReport>> {
        if self.cli.version {
            write_version(out)?;
            out.flush()?;
            return Ok(None);
        }

        self.run(out).map(Some)
    }
}
