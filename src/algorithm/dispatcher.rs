//! Fan-out of row-0 columns across worker threads and fan-in of their results

use std::thread::{self, ScopedJoinHandle};
use std::time::Instant;

use crate::algorithm::backtrack::solve_from_column;
use crate::algorithm::state::{SearchReport, SearchState};
use crate::io::configuration::{Configuration, WORKER_THREAD_PREFIX};
use crate::io::error::{NQueensError, Result, panic_message};
use crate::spatial::Board;

/// Hooks called by the dispatcher as workers start and finish
///
/// Worker hooks run on the worker's own thread. Every method defaults to
/// doing nothing, and `()` is the silent observer.
pub trait SearchObserver: Sync {
    /// Called once before any worker is spawned
    fn search_started(&self, _workers: usize) {}

    /// Called on the worker thread before its search begins
    fn worker_started(&self, _column: usize) {}

    /// Called on the worker thread after its search completes
    fn worker_finished(&self, _column: usize) {}

    /// Called once after every worker has been joined, successful or not
    fn search_finished(&self) {}
}

impl SearchObserver for () {}

/// Run the full search with no observer
///
/// # Errors
///
/// Returns an error if a worker cannot be started or panics
pub fn solve(config: &Configuration) -> Result<SearchReport> {
    solve_with_observer(config, &())
}

/// Run the full search, reporting worker lifecycle events to `observer`
///
/// Spawns one worker per row-0 column, each on its own board, and waits for
/// all of them. Solutions in the returned report are sorted by placement.
///
/// # Errors
///
/// Returns [`NQueensError::WorkerSpawn`] if a worker thread cannot be
/// started, or [`NQueensError::WorkerPanicked`] if any worker panicked.
/// In both cases every worker that did start has been joined first.
pub fn solve_with_observer<O>(config: &Configuration, observer: &O) -> Result<SearchReport>
where
    O: SearchObserver + ?Sized,
{
    let size = config.board_size();
    let state = SearchState::new();
    let start_time = Instant::now();

    tracing::debug!(board_size = size, workers = size, "starting search");
    observer.search_started(size);

    let (spawn_error, failures) = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(size);
        let mut spawn_error = None;

        for column in 0..size {
            let state = &state;
            let spawned = thread::Builder::new()
                .name(format!("{WORKER_THREAD_PREFIX}{column}"))
                .spawn_scoped(scope, move || {
                    observer.worker_started(column);
                    let worker_start = Instant::now();

                    let mut board = Board::for_worker(size, column);
                    solve_from_column(&mut board, column, state);

                    tracing::debug!(
                        column,
                        elapsed_secs = worker_start.elapsed().as_secs_f64(),
                        "worker finished"
                    );
                    observer.worker_finished(column);
                });

            match spawned {
                Ok(handle) => handles.push((column, handle)),
                Err(source) => {
                    spawn_error = Some(NQueensError::WorkerSpawn { column, source });
                    break;
                }
            }
        }

        (spawn_error, join_workers(handles))
    });

    observer.search_finished();

    if let Some(error) = spawn_error {
        return Err(error);
    }

    if let Some((column, message)) = failures.first() {
        tracing::error!(column, failed = failures.len(), "search worker panicked");
        return Err(NQueensError::WorkerPanicked {
            column: *column,
            message: message.clone(),
            failed: failures.len(),
        });
    }

    let mut report = state.into_report(size, start_time.elapsed());
    report.sort_solutions();

    tracing::info!(
        board_size = size,
        iterations = report.iterations,
        solutions = report.solution_count,
        elapsed_secs = report.elapsed.as_secs_f64(),
        "search complete"
    );

    Ok(report)
}

/// Join every worker, collecting `(column, panic message)` for each failure
fn join_workers(handles: Vec<(usize, ScopedJoinHandle<'_, ()>)>) -> Vec<(usize, String)> {
    handles
        .into_iter()
        .filter_map(|(column, handle)| {
            handle
                .join()
                .err()
                .map(|payload| (column, panic_message(payload.as_ref())))
        })
        .collect()
}
