/// Pip-value bitset for distinctness checks
pub mod bitset;
/// Abort checks and search counters
pub mod budget;
/// Constraint evaluation with the region completeness gate
pub mod evaluator;
/// Backtracking search engine
pub mod executor;
/// Solved grids and their serializable view
pub mod solution;

pub use executor::{BacktrackingSolver, SearchOutcome};
