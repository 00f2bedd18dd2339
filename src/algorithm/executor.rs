use tracing::{debug, trace};

use crate::algorithm::budget::{SearchBudget, SearchStats, Unlimited};
use crate::algorithm::evaluator::check_all;
use crate::algorithm::solution::{Placement, Solution};
use crate::model::puzzle::PuzzleDefinition;
use crate::spatial::grid::{Cell, PlacementGrid};
use crate::spatial::tiles::{Orientation, TileId, TilePool};

/// Final result of one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every cell covered and every constraint satisfied
    Solved(Solution),
    /// The search space was exhausted without a cover
    NoSolution,
    /// The injected budget stopped the search first
    Aborted,
}

impl SearchOutcome {
    /// The solution, if one was found
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::NoSolution | Self::Aborted => None,
        }
    }

    /// Whether a solution was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Result of one recursive call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Solved,
    Exhausted,
    Aborted,
}

/// Chronological backtracking search over the double-six pool
///
/// The pool is consumed in strictly increasing index order along every
/// branch: a call at cursor `c` only tries tiles `c..`, and committing tile
/// `i` hands `i + 1` to the child. The grid and pool are owned by the solver
/// for the duration of a solve and are reset at the start of each one.
#[derive(Debug, Clone)]
pub struct BacktrackingSolver {
    puzzle: PuzzleDefinition,
    pool: TilePool,
    grid: PlacementGrid,
    placements: Vec<Placement>,
    stats: SearchStats,
}

impl BacktrackingSolver {
    /// Create a solver owning a fresh pool and an empty grid
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        let grid = PlacementGrid::new(puzzle.grid_size());
        Self {
            puzzle,
            pool: TilePool::double_six(),
            grid,
            placements: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Puzzle being solved
    pub const fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    /// Counters from the most recent solve
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the search to completion
    pub fn solve(&mut self) -> SearchOutcome {
        self.solve_with_budget(&mut Unlimited)
    }

    /// Run the search, consulting `budget` at the top of every recursive call
    pub fn solve_with_budget<B>(&mut self, budget: &mut B) -> SearchOutcome
    where
        B: SearchBudget + ?Sized,
    {
        self.reset();

        let Some(target) = self.puzzle.tiles_required() else {
            debug!(
                grid_size = self.puzzle.grid_size(),
                "odd cell count, no cover exists"
            );
            return SearchOutcome::NoSolution;
        };
        if target > self.pool.len() {
            debug!(
                target,
                pool = self.pool.len(),
                "grid needs more tiles than the pool holds"
            );
            return SearchOutcome::NoSolution;
        }

        debug!(
            grid_size = self.puzzle.grid_size(),
            constraints = self.puzzle.constraints().len(),
            target,
            "starting search"
        );

        let outcome = match self.backtrack(0, 0, target, budget) {
            Step::Solved => SearchOutcome::Solved(Solution::new(
                self.pool.clone(),
                self.grid.clone(),
                self.placements.clone(),
            )),
            Step::Exhausted => SearchOutcome::NoSolution,
            Step::Aborted => SearchOutcome::Aborted,
        };

        debug!(
            solved = outcome.is_solved(),
            aborted = matches!(outcome, SearchOutcome::Aborted),
            nodes = self.stats.nodes,
            placements = self.stats.placements,
            rollbacks = self.stats.rollbacks,
            constraint_checks = self.stats.constraint_checks,
            "search finished"
        );

        outcome
    }

    fn reset(&mut self) {
        self.pool = TilePool::double_six();
        self.grid = PlacementGrid::new(self.puzzle.grid_size());
        self.placements.clear();
        self.stats = SearchStats::default();
    }

    fn backtrack<B>(&mut self, cursor: usize, placed: usize, target: usize, budget: &mut B) -> Step
    where
        B: SearchBudget + ?Sized,
    {
        self.stats.nodes += 1;
        if budget.should_abort(&self.stats) {
            return Step::Aborted;
        }

        if placed == target {
            return Step::Solved;
        }

        // Every candidate at this node sees the same pre-placement grid,
        // because failed branches restore exactly the cells they touched
        if !self.constraints_hold() {
            return Step::Exhausted;
        }

        let size = self.grid.size();
        for id in self.pool.ids_from(cursor) {
            for orientation in Orientation::ALL {
                if let Some(tile) = self.pool.get_mut(id) {
                    tile.set_orientation(orientation);
                }

                for x in 0..size {
                    for y in 0..size {
                        let primary = Cell::new(x, y);
                        if !self.grid.is_vacant(primary) {
                            continue;
                        }
                        let Some(secondary) = orientation.adjacent(primary) else {
                            continue;
                        };
                        if !self.grid.is_vacant(secondary) {
                            continue;
                        }

                        self.commit(id, primary, secondary, orientation);

                        let step = if self.constraints_hold() {
                            self.backtrack(id.index() + 1, placed + 1, target, budget)
                        } else {
                            Step::Exhausted
                        };

                        match step {
                            Step::Solved => return Step::Solved,
                            Step::Aborted => {
                                self.rollback(primary, secondary);
                                return Step::Aborted;
                            }
                            Step::Exhausted => self.rollback(primary, secondary),
                        }
                    }
                }
            }
        }

        Step::Exhausted
    }

    fn constraints_hold(&mut self) -> bool {
        self.stats.constraint_checks += 1;
        check_all(self.puzzle.constraints(), &self.grid, &self.pool)
    }

    fn commit(&mut self, tile: TileId, primary: Cell, secondary: Cell, orientation: Orientation) {
        self.grid.place(tile, primary);
        self.grid.place(tile, secondary);
        self.placements.push(Placement {
            tile,
            primary,
            secondary,
            orientation,
        });
        self.stats.placements += 1;
        trace!(tile = tile.index(), %primary, %secondary, %orientation, "commit");
    }

    fn rollback(&mut self, primary: Cell, secondary: Cell) {
        self.grid.clear(secondary);
        self.grid.clear(primary);
        self.placements.pop();
        self.stats.rollbacks += 1;
    }
}
