/// Backtracking search over queen placements
pub mod backtrack;
/// Column and diagonal occupancy sets for verifying placements
pub mod bitset;
/// Worker fan-out, fan-in and lifecycle observation
pub mod dispatcher;
/// Attack checks for candidate positions
pub mod safety;
/// Shared counters, solution collector and final report
pub mod state;
