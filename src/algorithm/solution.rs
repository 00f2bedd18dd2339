//! Solved grids and their serializable view

use serde::Serialize;

use crate::spatial::grid::{Cell, PlacementGrid};
use crate::spatial::tiles::{Orientation, Tile, TileId, TilePool};

/// One committed tile along the search path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pool handle of the placed tile
    pub tile: TileId,
    /// Cell holding the tile's first half
    pub primary: Cell,
    /// Cell holding the tile's second half
    pub secondary: Cell,
    /// Orientation the tile was placed with
    pub orientation: Orientation,
}

/// A fully covered grid together with the tiles it references
///
/// Owns a snapshot of the pool so orientations read back exactly as they
/// were when the search succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pool: TilePool,
    grid: PlacementGrid,
    placements: Vec<Placement>,
}

impl Solution {
    /// Bundle a solved grid with its pool snapshot and placement history
    pub const fn new(pool: TilePool, grid: PlacementGrid, placements: Vec<Placement>) -> Self {
        Self {
            pool,
            grid,
            placements,
        }
    }

    /// The covered grid
    pub const fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    /// Pool snapshot the grid's handles point into
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Placements in the order the search committed them
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Tile covering a cell
    pub fn tile_at(&self, cell: Cell) -> Option<&Tile> {
        self.grid.occupant(cell).and_then(|id| self.pool.get(id))
    }

    /// Row-major cell view, one inner vector per row
    pub fn rows(&self) -> Vec<Vec<Option<CellView>>> {
        let size = self.grid.size();
        let mut rows: Vec<Vec<Option<CellView>>> =
            (0..size).map(|_| Vec::with_capacity(size)).collect();
        for (cell, occupant) in self.grid.cells() {
            let view = occupant
                .and_then(|id| self.pool.get(id))
                .map(CellView::from);
            if let Some(row) = rows.get_mut(cell.x) {
                row.push(view);
            }
        }
        rows
    }
}

/// Serializable description of the tile covering one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// First pip count of the covering tile
    pub left: u8,
    /// Second pip count of the covering tile
    pub right: u8,
    /// Orientation of the covering tile
    pub orientation: Orientation,
}

impl From<&Tile> for CellView {
    fn from(tile: &Tile) -> Self {
        Self {
            left: tile.left(),
            right: tile.right(),
            orientation: tile.orientation(),
        }
    }
}

/// Response shape returned to callers: solved flag plus the optional grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResponse {
    /// Whether a solution was found
    pub solved: bool,
    /// Row-major cell view of the solution
    pub solution: Option<Vec<Vec<Option<CellView>>>>,
}

impl SolveResponse {
    /// Response for a found solution
    pub fn solved(solution: &Solution) -> Self {
        Self {
            solved: true,
            solution: Some(solution.rows()),
        }
    }

    /// Response when the search found nothing
    pub const fn unsolved() -> Self {
        Self {
            solved: false,
            solution: None,
        }
    }
}
