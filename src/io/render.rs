//! Text rendering of search statistics and solution boards
//!
//! Boards are drawn as ASCII grids:
//!
//! ```text
//! Solution: 1
//! +---+---+---+---+
//! |   | Q |   |   |
//! +---+---+---+---+
//! ```

use std::io::{self, Write};

use crate::algorithm::state::SearchReport;
use crate::io::configuration::VERSION_STRING;
use crate::spatial::Solution;

/// Write the program version line
///
/// # Errors
///
/// Returns any error raised by `out`
pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{VERSION_STRING}")
}

/// Write the iteration and solution counters
///
/// # Errors
///
/// Returns any error raised by `out`
pub fn write_stats<W: Write>(out: &mut W, report: &SearchReport) -> io::Result<()> {
    writeln!(out, "Number of iterations: {}", report.iterations)?;
    writeln!(out, "Number of solutions: {}", report.solution_count)
}

fn write_outline<W: Write>(out: &mut W, size: usize) -> io::Result<()> {
    writeln!(out, "{}+", "+---".repeat(size))
}

/// Write one solution preceded by its 1-based number
///
/// # Errors
///
/// Returns any error raised by `out`
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution, number: usize) -> io::Result<()> {
    writeln!(out, "Solution: {number}")?;

    for row in solution.rows() {
        write_outline(out, solution.size())?;
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        writeln!(out, "| {} |", cells.join(" | "))?;
    }

    write_outline(out, solution.size())
}

/// Write the statistics and, when `verbose`, every stored solution
///
/// # Errors
///
/// Returns any error raised by `out`
pub fn write_report<W: Write>(out: &mut W, report: &SearchReport, verbose: bool) -> io::Result<()> {
    write_stats(out, report)?;

    if verbose {
        for (index, solution) in report.solutions.iter().enumerate() {
            write_solution(out, solution, index + 1)?;
        }
    }

    Ok(())
}

/// Render a single solution to a string
pub fn render_solution(solution: &Solution, number: usize) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_solution(&mut buffer, solution, number);
    String::from_utf8_lossy(&buffer).into_owned()
}
