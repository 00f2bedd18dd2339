//! Validated puzzle definitions

use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, SolverError};
use crate::model::constraint::Constraint;
use crate::spatial::grid::Cell;

/// Grid size plus the constraints a solution must satisfy
///
/// Construction rejects every configuration mistake up front, so the search
/// never meets a malformed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDefinition {
    grid_size: usize,
    constraints: Vec<Constraint>,
}

impl PuzzleDefinition {
    /// Validate and build a puzzle definition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `grid_size` is zero or larger than the supported maximum
    /// - A constraint has an empty region
    /// - A constraint region references a cell outside the grid
    pub fn new(grid_size: usize, constraints: Vec<Constraint>) -> Result<Self> {
        if grid_size == 0 {
            return Err(SolverError::InvalidGridSize {
                size: grid_size,
                reason: "grid size must be positive".to_string(),
            });
        }
        if grid_size > MAX_GRID_SIZE {
            return Err(SolverError::InvalidGridSize {
                size: grid_size,
                reason: format!("grid size must not exceed {MAX_GRID_SIZE}"),
            });
        }

        for (index, constraint) in constraints.iter().enumerate() {
            if constraint.region().is_empty() {
                return Err(SolverError::EmptyRegion { constraint: index });
            }
            if let Some(&cell) = constraint
                .region()
                .iter()
                .find(|cell| cell.x >= grid_size || cell.y >= grid_size)
            {
                return Err(SolverError::RegionOutOfBounds {
                    constraint: index,
                    cell,
                    grid_size,
                });
            }
        }

        Ok(Self {
            grid_size,
            constraints,
        })
    }

    /// The puzzle served when no definition is supplied
    ///
    /// A single EQUAL constraint over the top-left 2×2 block.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_size` is invalid or smaller than 2
    pub fn default_for(grid_size: usize) -> Result<Self> {
        let region = vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ];
        Self::new(grid_size, vec![Constraint::equal(region)])
    }

    /// Number of rows (and columns)
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Constraints in declaration order
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Total number of cells to cover
    pub const fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Tiles a full cover needs, `None` when the cell count is odd
    pub fn tiles_required(&self) -> Option<usize> {
        let cells = self.cell_count();
        cells.is_multiple_of(2).then_some(cells / 2)
    }
}
