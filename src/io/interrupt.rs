//! Ctrl-C handling for the command-line binary

use std::io::{self, Write};

use crate::io::configuration::INTERRUPT_NOTICE;
use crate::io::error::Result;

/// Exit status used when the user interrupts a run
pub const INTERRUPT_EXIT_CODE: i32 = 1;

/// Write the interrupt notice, framed by blank lines
///
/// # Errors
///
/// Returns any error raised by `out`
pub fn write_interrupt_notice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{INTERRUPT_NOTICE}\n")?;
    out.flush()
}

/// Install a handler that prints a notice to stdout and exits with status 1
///
/// Results are only rendered after every worker has finished, so an
/// interrupted run never prints partial output.
///
/// # Errors
///
/// Returns [`crate::NQueensError::SignalHandler`] if a handler is already
/// installed or the platform refuses the registration
// Allow exit for the handler, which is the process's last act
#[allow(clippy::exit)]
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let _ = write_interrupt_notice(&mut io::stdout());
        std::process::exit(INTERRUPT_EXIT_CODE);
    })?;

    Ok(())
}
