//! Constraint evaluation against the current placement grid
//!
//! A constraint is only enforced once every cell of its region is covered.
//! Until then it holds vacuously, so a partially filled region never rejects
//! a placement. Evaluation reads the grid and pool and never mutates either.

use crate::algorithm::bitset::PipSet;
use crate::model::constraint::{Constraint, ConstraintKind};
use crate::spatial::grid::PlacementGrid;
use crate::spatial::tiles::TilePool;

/// Test one constraint against the grid
pub fn check(constraint: &Constraint, grid: &PlacementGrid, pool: &TilePool) -> bool {
    match region_values(constraint, grid, pool) {
        Some(values) => apply_rule(constraint, &values),
        None => true,
    }
}

/// Test every constraint, stopping at the first that fails
pub fn check_all(constraints: &[Constraint], grid: &PlacementGrid, pool: &TilePool) -> bool {
    constraints
        .iter()
        .all(|constraint| check(constraint, grid, pool))
}

/// Collect both pips of every covering tile in region order
///
/// Returns `None` while any region cell is empty.
pub fn region_values(
    constraint: &Constraint,
    grid: &PlacementGrid,
    pool: &TilePool,
) -> Option<Vec<u8>> {
    let mut values = Vec::with_capacity(constraint.region().len() * 2);
    for &cell in constraint.region() {
        let tile = grid.occupant(cell).and_then(|id| pool.get(id))?;
        values.extend(tile.pips());
    }
    Some(values)
}

/// Apply a rule to an already collected value sequence
pub fn apply_rule(constraint: &Constraint, values: &[u8]) -> bool {
    match constraint.kind() {
        ConstraintKind::Equal => values.windows(2).all(|pair| pair.first() == pair.last()),
        ConstraintKind::NotEqual => {
            let mut seen = PipSet::new();
            values.iter().all(|&pip| seen.insert(pip))
        }
        ConstraintKind::GreaterThan => constraint
            .operand()
            .is_some_and(|bound| values.iter().all(|&pip| i32::from(pip) > bound)),
        ConstraintKind::LessThan => constraint
            .operand()
            .is_some_and(|bound| values.iter().all(|&pip| i32::from(pip) < bound)),
        ConstraintKind::Sum => constraint.operand().is_some_and(|total| {
            values.iter().map(|&pip| i32::from(pip)).sum::<i32>() == total
        }),
        ConstraintKind::Blank => true,
    }
}
