//! Spatial data structures for domino placement
//!
//! This module contains:
//! - The placement grid and its cell coordinates
//! - Domino tiles, orientations and the double-six tile pool

/// Placement grid and cell coordinates
pub mod grid;
/// Domino tiles and tile pool generation
pub mod tiles;

pub use grid::{Cell, PlacementGrid};
pub use tiles::{Orientation, Tile, TileId, TilePool};
