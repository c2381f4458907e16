//! CLI entry point for the N-Queens solver

use clap::Parser;
use nqueens::io::cli::{Cli, SolveRunner, missing_usage, parse_error_exit_code};
use nqueens::io::interrupt::install_interrupt_handler;
use nqueens::io::logging::init_logging;
use std::process::ExitCode;

// Allow print for parse errors and run failures reported to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            if let Some(usage) = missing_usage(&error) {
                eprintln!("{usage}");
            }
            let _ = error.print();
            return ExitCode::from(parse_error_exit_code(&error));
        }
    };

    init_logging(cli.verbose);

    if let Err(error) = install_interrupt_handler() {
        tracing::warn!("{error}");
    }

    let runner = SolveRunner::new(cli);
    // Unlocked so the interrupt handler can still reach stdout mid-search
    match runner.execute(&mut std::io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
