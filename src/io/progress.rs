//! Worker completion progress bar

use crate::algorithm::dispatcher::SearchObserver;
use crate::io::configuration::PROGRESS_TEMPLATE;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static WORKER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Counts finished search workers on a single progress bar
///
/// The bar is sized when the search starts and cleared once every worker
/// has been joined, so it never mixes with the rendered report.
pub struct WorkerProgress {
    bar: ProgressBar,
}

impl Default for WorkerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerProgress {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(WORKER_STYLE.clone());
        Self { bar }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Workers finished so far
    pub fn finished_workers(&self) -> u64 {
        self.bar.position()
    }

    /// Workers expected for the current search
    pub fn total_workers(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }
}

impl SearchObserver for WorkerProgress {
    fn search_started(&self, workers: usize) {
        self.bar.set_length(workers as u64);
        self.bar.set_position(0);
    }

    fn worker_finished(&self, _column: usize) {
        self.bar.inc(1);
    }

    fn search_finished(&self) {
        self.bar.finish_and_clear();
    }
}
