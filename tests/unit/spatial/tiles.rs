//! Tests for dominoes, orientations and pool generation

#[cfg(test)]
mod tests {

    use pips_solver::io::configuration::POOL_SIZE;
    use pips_solver::spatial::grid::Cell;
    use pips_solver::spatial::tiles::{Orientation, Tile, TileId, TilePool};
    use std::collections::HashSet;

    #[test]
    fn test_pool_has_doubles_and_both_orders_of_every_pair() {
        let pool = TilePool::double_six();

        assert_eq!(pool.len(), POOL_SIZE);
        assert_eq!(pool.iter().filter(|tile| tile.is_double()).count(), 7);

        let pairs: HashSet<[u8; 2]> = pool.iter().map(Tile::pips).collect();
        assert_eq!(pairs.len(), POOL_SIZE, "every ordered pair appears once");
        for left in 0..=6 {
            for right in 0..=6 {
                assert!(pairs.contains(&[left, right]), "missing {left}|{right}");
            }
        }
    }

    // Generation order is the search priority
    #[test]
    fn test_pool_generation_order() {
        let pool = TilePool::double_six();
        let head: Vec<[u8; 2]> = pool.iter().take(6).map(Tile::pips).collect();

        assert_eq!(head, vec![[0, 0], [0, 1], [1, 0], [0, 2], [2, 0], [0, 3]]);
        assert_eq!(pool.get(TileId::new(13)).map(Tile::pips), Some([1, 1]));
        assert_eq!(pool.get(TileId::new(48)).map(Tile::pips), Some([6, 6]));
        assert!(pool.get(TileId::new(49)).is_none());
    }

    #[test]
    fn test_pool_starts_horizontal() {
        let pool = TilePool::default();
        assert!(!pool.is_empty());
        assert!(
            pool.iter()
                .all(|tile| tile.orientation() == Orientation::Horizontal)
        );
    }

    #[test]
    fn test_ids_from_is_monotonic_suffix() {
        let pool = TilePool::double_six();
        let ids: Vec<usize> = pool.ids_from(45).map(TileId::index).collect();

        assert_eq!(ids, vec![45, 46, 47, 48]);
        assert_eq!(pool.ids_from(49).count(), 0);
        assert_eq!(pool.ids_from(100).count(), 0);
    }

    // Horizontal steps the first coordinate, vertical the second
    #[test]
    fn test_adjacent_cell_per_orientation() {
        let primary = Cell::new(1, 2);

        assert_eq!(
            Orientation::Horizontal.adjacent(primary),
            Some(Cell::new(2, 2))
        );
        assert_eq!(
            Orientation::Vertical.adjacent(primary),
            Some(Cell::new(1, 3))
        );
        assert_eq!(
            Orientation::Vertical.adjacent(Cell::new(0, usize::MAX)),
            None
        );
    }

    #[test]
    fn test_set_orientation_keeps_pips() {
        let mut tile = Tile::new(2, 5);
        tile.set_orientation(Orientation::Vertical);

        assert_eq!(tile.orientation(), Orientation::Vertical);
        assert_eq!(tile.pips(), [2, 5]);
    }

    #[test]
    fn test_rotate_swaps_pips_and_toggles() {
        let mut tile = Tile::new(2, 5);
        tile.rotate();

        assert_eq!(tile.left(), 5);
        assert_eq!(tile.right(), 2);
        assert_eq!(tile.orientation(), Orientation::Vertical);

        tile.rotate();
        assert_eq!(tile, Tile::new(2, 5));
    }

    #[test]
    fn test_display_and_serialized_names() {
        assert_eq!(Tile::new(3, 4).to_string(), "3|4");
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
        assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
        assert_eq!(
            serde_json::to_string(&Orientation::Horizontal).unwrap_or_default(),
            "\"horizontal\""
        );
    }
}
