/// Command-line parsing and the search runner
pub mod cli;
/// Constants and validated run configuration
pub mod configuration;
/// Error types
pub mod error;
/// Ctrl-C handling
pub mod interrupt;
/// Tracing subscriber setup
pub mod logging;
/// Worker progress bar
pub mod progress;
/// Text rendering of statistics and boards
pub mod render;
