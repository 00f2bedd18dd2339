//! Command-line interface for solving a puzzle file or the default puzzle

use crate::algorithm::budget::{Deadline, NodeLimit};
use crate::algorithm::executor::{BacktrackingSolver, SearchOutcome};
use crate::algorithm::solution::SolveResponse;
use crate::io::configuration::DEFAULT_GRID_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_solution_png;
use crate::io::progress::SearchProgress;
use crate::io::puzzle_file::{load_puzzle, save_response, write_response};
use crate::model::puzzle::PuzzleDefinition;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "pips-solver")]
#[command(
    author,
    version,
    about = "Place double-six dominoes on a square grid under region constraints"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Puzzle definition JSON file (the default puzzle is used when omitted)
    #[arg(value_name = "PUZZLE")]
    pub puzzle: Option<PathBuf>,

    /// Grid size of the default puzzle
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Give up after visiting this many search nodes
    #[arg(short = 'n', long)]
    pub max_nodes: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(short, long)]
    pub timeout_ms: Option<u64>,

    /// Write the solution JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Render the solved grid as a PNG image
    #[arg(short, long)]
    pub render: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Reject limits that can never allow a search to run
    ///
    /// # Errors
    ///
    /// Returns an error if the node limit or timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == Some(0) {
            return Err(invalid_parameter(
                "max_nodes",
                &0,
                &"must allow at least one node",
            ));
        }
        if self.timeout_ms == Some(0) {
            return Err(invalid_parameter("timeout_ms", &0, &"must be positive"));
        }
        Ok(())
    }
}

/// Loads the requested puzzle, solves it and writes the results
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Puzzle from the given file, or the default puzzle at the requested size
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle file cannot be read or is invalid, or
    /// the default puzzle cannot be built at the requested grid size
    pub fn load_puzzle(&self) -> Result<PuzzleDefinition> {
        match &self.cli.puzzle {
            Some(path) => {
                if self.cli.grid_size != DEFAULT_GRID_SIZE {
                    warn!("--grid-size is ignored when a puzzle file is given");
                }
                load_puzzle(path)
            }
            None => PuzzleDefinition::default_for(self.cli.grid_size),
        }
    }

    /// Solve the puzzle and write the response and optional rendering
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, puzzle loading, writing the
    /// response or rendering fails. An unsolvable puzzle is not an error.
    pub fn run(&self) -> Result<SearchOutcome> {
        self.cli.validate()?;
        let puzzle = self.load_puzzle()?;
        info!(
            grid_size = puzzle.grid_size(),
            constraints = puzzle.constraints().len(),
            "puzzle loaded"
        );

        let progress = if self.cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };
        let limits = (
            self.cli.max_nodes.map(NodeLimit::new),
            self.cli
                .timeout_ms
                .map(|ms| Deadline::after(Duration::from_millis(ms))),
        );
        let mut budget = (limits, progress);

        let mut solver = BacktrackingSolver::new(puzzle);
        let outcome = solver.solve_with_budget(&mut budget);
        budget.1.finish(&outcome, &solver.stats());

        if matches!(outcome, SearchOutcome::Aborted) {
            warn!("search stopped by its limits before it completed");
        }

        let response = outcome
            .solution()
            .map_or_else(SolveResponse::unsolved, SolveResponse::solved);
        match &self.cli.output {
            Some(path) => save_response(&response, path)?,
            None => write_response(&response, std::io::stdout().lock())?,
        }

        if let Some(render_path) = &self.cli.render {
            match outcome.solution() {
                Some(solution) => export_solution_png(solution, render_path)?,
                None => warn!("no solution to render"),
            }
        }

        Ok(outcome)
    }
}
