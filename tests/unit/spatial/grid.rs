//! Tests for the placement grid and cell coordinates

#[cfg(test)]
mod tests {

    use pips_solver::spatial::grid::{Cell, PlacementGrid};
    use pips_solver::spatial::tiles::TileId;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = PlacementGrid::new(3);

        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert_eq!(grid.occupied_count(), 0);
        assert!(!grid.is_full());
        assert!(grid.cells().all(|(_, occupant)| occupant.is_none()));
    }

    #[test]
    fn test_in_bounds_checks_both_coordinates() {
        let grid = PlacementGrid::new(2);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(1, 1)));
        assert!(!grid.in_bounds(Cell::new(2, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 2)));
    }

    // Both halves of a tile reference the same handle
    #[test]
    fn test_place_records_shared_handle() {
        let mut grid = PlacementGrid::new(2);
        let tile = TileId::new(7);

        assert!(grid.place(tile, Cell::new(0, 0)));
        assert!(grid.place(tile, Cell::new(1, 0)));

        assert_eq!(grid.occupant(Cell::new(0, 0)), Some(tile));
        assert_eq!(grid.occupant(Cell::new(1, 0)), Some(tile));
        assert_eq!(grid.occupant(Cell::new(0, 1)), None);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn test_place_out_of_bounds_leaves_grid_untouched() {
        let mut grid = PlacementGrid::new(2);

        assert!(!grid.place(TileId::new(0), Cell::new(2, 1)));
        assert_eq!(grid.occupied_count(), 0);
        assert_eq!(grid.occupant(Cell::new(2, 1)), None);
    }

    // Overwriting a covered cell must not inflate the occupancy count
    #[test]
    fn test_place_over_occupied_cell_keeps_count() {
        let mut grid = PlacementGrid::new(2);
        grid.place(TileId::new(0), Cell::new(0, 0));
        grid.place(TileId::new(1), Cell::new(0, 0));

        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(grid.occupant(Cell::new(0, 0)), Some(TileId::new(1)));
    }

    #[test]
    fn test_clear_returns_previous_occupant() {
        let mut grid = PlacementGrid::new(2);
        grid.place(TileId::new(3), Cell::new(1, 1));

        assert_eq!(grid.clear(Cell::new(1, 1)), Some(TileId::new(3)));
        assert_eq!(grid.clear(Cell::new(1, 1)), None);
        assert_eq!(grid.clear(Cell::new(5, 5)), None);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_is_vacant_rejects_out_of_bounds() {
        let mut grid = PlacementGrid::new(2);
        grid.place(TileId::new(0), Cell::new(0, 0));

        assert!(!grid.is_vacant(Cell::new(0, 0)));
        assert!(grid.is_vacant(Cell::new(0, 1)));
        assert!(!grid.is_vacant(Cell::new(0, 2)));
    }

    #[test]
    fn test_is_full_after_covering_every_cell() {
        let mut grid = PlacementGrid::new(2);
        grid.place(TileId::new(0), Cell::new(0, 0));
        grid.place(TileId::new(0), Cell::new(1, 0));
        grid.place(TileId::new(1), Cell::new(0, 1));
        assert!(!grid.is_full());

        grid.place(TileId::new(1), Cell::new(1, 1));
        assert!(grid.is_full());
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = PlacementGrid::new(2);
        let order: Vec<Cell> = grid.cells().map(|(cell, _)| cell).collect();

        assert_eq!(
            order,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_cell_conversions_and_display() {
        let cell = Cell::from((2, 3));
        assert_eq!(cell, Cell::new(2, 3));
        assert_eq!(<(usize, usize)>::from(cell), (2, 3));
        assert_eq!(cell.to_string(), "(2, 3)");
    }

    // Cells appear as two-element arrays in puzzle files
    #[test]
    fn test_cell_serializes_as_pair() {
        let json = serde_json::to_string(&Cell::new(1, 0)).unwrap_or_default();
        assert_eq!(json, "[1,0]");

        let parsed: Option<Cell> = serde_json::from_str("[0, 3]").ok();
        assert_eq!(parsed, Some(Cell::new(0, 3)));
    }
}
