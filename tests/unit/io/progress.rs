//! Tests for the worker progress bar

#[cfg(test)]
mod tests {
    use nqueens::SearchObserver;
    use nqueens::io::progress::WorkerProgress;
    use nqueens::{Configuration, solve_with_observer};

    // Tests a hidden bar still tracks worker counts
    // Verified by not sizing the bar at search start
    #[test]
    fn test_hidden_progress_counts_workers() {
        let progress = WorkerProgress::hidden();

        progress.search_started(5);
        assert_eq!(progress.total_workers(), 5);
        assert_eq!(progress.finished_workers(), 0);

        progress.worker_started(0);
        progress.worker_finished(0);
        progress.worker_finished(1);
        assert_eq!(progress.finished_workers(), 2);

        progress.search_finished();
    }

    // Tests a full search advances the bar once per worker
    // Verified by incrementing on worker start instead of finish
    #[test]
    fn test_progress_during_search() {
        let progress = WorkerProgress::hidden();
        let config = Configuration::new(6, false).unwrap();

        let report = solve_with_observer(&config, &progress).unwrap();

        assert_eq!(report.solution_count, 4);
        assert_eq!(progress.total_workers(), 6);
        assert_eq!(progress.finished_workers(), 6);
    }

    // Tests restarting a search resets the bar
    // Verified by leaving the previous position in place
    #[test]
    fn test_progress_resets_between_searches() {
        let progress = WorkerProgress::default();

        progress.search_started(3);
        progress.worker_finished(0);
        progress.search_started(4);

        assert_eq!(progress.total_workers(), 4);
        assert_eq!(progress.finished_workers(), 0);
        progress.search_finished();
    }
}
