//! Domino tiles and the fixed double-six tile pool
//!
//! Tiles live in a pool arena and are addressed by [`TileId`]. A placed tile
//! is referenced from both of its grid cells by id, never duplicated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::configuration::{MAX_PIPS, POOL_SIZE};
use crate::spatial::grid::Cell;

/// Direction a placed tile extends from its primary cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Second half sits one step along the first coordinate
    #[default]
    Horizontal,
    /// Second half sits one step along the second coordinate
    Vertical,
}

impl Orientation {
    /// Orientations in the order the search tries them
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The other orientation
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Cell covered by the second half of a tile whose first half is at `primary`
    ///
    /// Returns `None` only on coordinate overflow; bounds are the grid's concern.
    pub const fn adjacent(self, primary: Cell) -> Option<Cell> {
        match self {
            Self::Horizontal => match primary.x.checked_add(1) {
                Some(x) => Some(Cell::new(x, primary.y)),
                None => None,
            },
            Self::Vertical => match primary.y.checked_add(1) {
                Some(y) => Some(Cell::new(primary.x, y)),
                None => None,
            },
        }
    }

    /// Lowercase name used in serialized output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a tile in the pool arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(usize);

impl TileId {
    /// Wrap a pool index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the tile in pool generation order
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A two-sided domino with an orientation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    left: u8,
    right: u8,
    orientation: Orientation,
}

impl Tile {
    /// Create a horizontally oriented tile
    pub const fn new(left: u8, right: u8) -> Self {
        Self {
            left,
            right,
            orientation: Orientation::Horizontal,
        }
    }

    /// Pip count of the first half
    pub const fn left(&self) -> u8 {
        self.left
    }

    /// Pip count of the second half
    pub const fn right(&self) -> u8 {
        self.right
    }

    /// Both pip counts in tile order
    pub const fn pips(&self) -> [u8; 2] {
        [self.left, self.right]
    }

    /// Current orientation
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the orientation without touching the pip order
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Whether both halves carry the same pip count
    pub const fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Swap the halves and toggle the orientation
    ///
    /// The search engine only ever sets the orientation directly, so this is
    /// never applied to tiles during a solve.
    pub const fn rotate(&mut self) {
        let left = self.left;
        self.left = self.right;
        self.right = left;
        self.orientation = self.orientation.toggled();
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.left, self.right)
    }
}

/// The fixed pool of tiles available to one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl Default for TilePool {
    fn default() -> Self {
        Self::double_six()
    }
}

impl TilePool {
    /// Generate the 49-entry double-six pool
    ///
    /// Every unordered pair `(a, b)` with `a <= b` yields `(a, b)`, and for
    /// non-doubles `(b, a)` immediately after. This order is the search
    /// priority.
    pub fn double_six() -> Self {
        let mut tiles = Vec::with_capacity(POOL_SIZE);
        for left in 0..=MAX_PIPS {
            for right in left..=MAX_PIPS {
                tiles.push(Tile::new(left, right));
                if left != right {
                    tiles.push(Tile::new(right, left));
                }
            }
        }
        Self { tiles }
    }

    /// Number of tiles in the pool
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pool holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by handle
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Mutable access to a tile by handle
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Handles from `start` to the end of the pool, in generation order
    pub fn ids_from(&self, start: usize) -> impl Iterator<Item = TileId> + use<> {
        (start..self.tiles.len()).map(TileId::new)
    }

    /// All tiles in generation order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
