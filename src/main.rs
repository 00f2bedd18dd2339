//! CLI entry point for the pips domino solver

use clap::Parser;
use pips_solver::io::cli::{Cli, PuzzleRunner};
use pips_solver::io::logging::init_logging;

fn main() -> pips_solver::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let runner = PuzzleRunner::new(cli);
    runner.run()?;
    Ok(())
}
