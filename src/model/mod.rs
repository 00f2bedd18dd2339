//! Puzzle model: constraints and validated puzzle definitions

/// Constraint types and region-scoped rules
pub mod constraint;
/// Puzzle definition construction and validation
pub mod puzzle;

pub use constraint::{Constraint, ConstraintKind};
pub use puzzle::PuzzleDefinition;
