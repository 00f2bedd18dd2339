//! Input/output: CLI, puzzle files, rendering, progress, logging and errors

/// Command-line parsing and the solve workflow
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering of solutions
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Terminal progress spinner
pub mod progress;
/// Puzzle JSON parsing and response writing
pub mod puzzle_file;
