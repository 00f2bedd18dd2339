//! Backtracking solver for pips puzzles: cover a square grid with double-six
//! dominoes so that region-scoped arithmetic constraints hold
//!
//! The search walks the fixed 49-tile pool in generation order, places each
//! candidate at every free cell in both orientations, and rolls back exactly
//! the cells it touched when a branch fails. Constraints are only enforced
//! once every cell of their region is covered.

#![forbid(unsafe_code)]

/// Search engine, constraint evaluation and solution views
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Constraints and puzzle definitions
pub mod model;
/// Placement grid and domino tiles
pub mod spatial;

pub use algorithm::{BacktrackingSolver, SearchOutcome};
pub use io::error::{Result, SolverError};
pub use model::{Constraint, ConstraintKind, PuzzleDefinition};
