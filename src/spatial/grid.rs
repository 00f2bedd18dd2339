//! Square placement grid recording which tile covers each cell
//!
//! Cells hold an optional [`TileId`] into the tile pool rather than the tile
//! itself, so both halves of a placed domino point at the same pool entry.
//! The grid performs no validation beyond bounds; adjacency, overlap and
//! constraint checks belong to the search engine.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::spatial::tiles::TileId;

/// Grid coordinate, `x` on the outer (row) axis and `y` on the inner (column) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    /// Outer coordinate (row)
    pub x: usize,
    /// Inner coordinate (column)
    pub y: usize,
}

impl Cell {
    /// Create a cell from its two coordinates
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    const fn index(self) -> [usize; 2] {
        [self.x, self.y]
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// N×N store of optional tile handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    cells: Array2<Option<TileId>>,
    occupied: usize,
}

impl PlacementGrid {
    /// Create an empty grid with `size` rows and columns
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
            occupied: 0,
        }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a cell lies inside the grid
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.cells.nrows() && cell.y < self.cells.ncols()
    }

    /// Tile covering a cell, `None` when empty or out of bounds
    pub fn occupant(&self, cell: Cell) -> Option<TileId> {
        self.cells.get(cell.index()).copied().flatten()
    }

    /// Check if a cell is inside the grid and not covered
    pub fn is_vacant(&self, cell: Cell) -> bool {
        self.cells.get(cell.index()).is_some_and(Option::is_none)
    }

    /// Record `tile` as covering `cell`
    ///
    /// Returns `false` without touching the grid if the cell is out of bounds.
    pub fn place(&mut self, tile: TileId, cell: Cell) -> bool {
        let Some(slot) = self.cells.get_mut(cell.index()) else {
            return false;
        };
        if slot.is_none() {
            self.occupied += 1;
        }
        *slot = Some(tile);
        true
    }

    /// Empty a cell, returning the tile that covered it
    pub fn clear(&mut self, cell: Cell) -> Option<TileId> {
        let previous = self.cells.get_mut(cell.index()).and_then(Option::take);
        if previous.is_some() {
            self.occupied -= 1;
        }
        previous
    }

    /// Number of covered cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Whether every cell is covered
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// All cells with their occupants in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<TileId>)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), occupant)| (Cell::new(x, y), *occupant))
    }
}
