//! Tests for solution snapshots and the serialized response shape

#[cfg(test)]
mod tests {

    use pips_solver::algorithm::executor::BacktrackingSolver;
    use pips_solver::algorithm::solution::{CellView, Solution, SolveResponse};
    use pips_solver::model::puzzle::PuzzleDefinition;
    use pips_solver::spatial::grid::Cell;
    use pips_solver::spatial::tiles::Orientation;
    use serde_json::json;

    fn solved_two_by_two() -> Solution {
        let puzzle = PuzzleDefinition::new(2, Vec::new()).expect("valid puzzle");
        BacktrackingSolver::new(puzzle)
            .solve()
            .solution()
            .cloned()
            .expect("2x2 without constraints is solvable")
    }

    #[test]
    fn test_tile_at_reads_through_pool() {
        let solution = solved_two_by_two();

        assert_eq!(solution.tile_at(Cell::new(1, 0)).map(|t| t.pips()), Some([0, 0]));
        assert_eq!(solution.tile_at(Cell::new(1, 1)).map(|t| t.pips()), Some([0, 1]));
        assert!(solution.tile_at(Cell::new(2, 0)).is_none());
        assert!(solution.grid().is_full());
        assert_eq!(solution.pool().len(), 49);
    }

    // Both cells of a tile show the same view
    #[test]
    fn test_rows_are_row_major_views() {
        let rows = solved_two_by_two().rows();
        let double_blank = CellView {
            left: 0,
            right: 0,
            orientation: Orientation::Horizontal,
        };
        let zero_one = CellView {
            left: 0,
            right: 1,
            orientation: Orientation::Horizontal,
        };

        assert_eq!(
            rows,
            vec![
                vec![Some(double_blank), Some(zero_one)],
                vec![Some(double_blank), Some(zero_one)],
            ]
        );
    }

    #[test]
    fn test_solved_response_json() {
        let response = SolveResponse::solved(&solved_two_by_two());
        let value = serde_json::to_value(&response).expect("serializable");
        let cell = |right: u8| json!({"left": 0, "right": right, "orientation": "horizontal"});

        assert_eq!(
            value,
            json!({
                "solved": true,
                "solution": [[cell(0), cell(1)], [cell(0), cell(1)]]
            })
        );
    }

    #[test]
    fn test_unsolved_response_json() {
        let value = serde_json::to_value(SolveResponse::unsolved()).expect("serializable");
        assert_eq!(value, json!({"solved": false, "solution": null}));
    }
}
