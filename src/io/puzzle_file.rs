//! JSON puzzle definitions and solution responses
//!
//! Puzzle files look like:
//!
//! ```json
//! { "grid_size": 4,
//!   "constraints": [ { "type": "SUM", "value": 6, "region": [[0, 2], [0, 3]] } ] }
//! ```

use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use tracing::warn;

use crate::algorithm::solution::SolveResponse;
use crate::io::configuration::DEFAULT_GRID_SIZE;
use crate::io::error::{Result, SolverError, file_system_error};
use crate::model::constraint::{Constraint, ConstraintKind};
use crate::model::puzzle::PuzzleDefinition;
use crate::spatial::grid::Cell;

const fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PuzzleFile {
    #[serde(default = "default_grid_size")]
    grid_size: usize,
    #[serde(default)]
    constraints: Vec<ConstraintEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConstraintEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Option<i32>,
    #[serde(default)]
    region: Vec<Cell>,
}

/// Parse and validate a puzzle definition from JSON text
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid puzzle JSON
/// - A constraint type name is unknown
/// - The resulting definition fails validation
pub fn parse_puzzle(json: &str) -> Result<PuzzleDefinition> {
    let file: PuzzleFile = serde_json::from_str(json).map_err(|source| SolverError::Json {
        context: "puzzle",
        source,
    })?;

    let mut constraints = Vec::with_capacity(file.constraints.len());
    for (index, entry) in file.constraints.into_iter().enumerate() {
        let kind: ConstraintKind = entry.kind.parse()?;
        if !kind.requires_operand() && entry.value.is_some() {
            warn!(constraint = index, %kind, "operand ignored for this constraint type");
        }
        constraints.push(Constraint::new(kind, entry.value, entry.region)?);
    }

    PuzzleDefinition::new(file.grid_size, constraints)
}

/// Read and validate a puzzle definition from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail
/// [`parse_puzzle`]
pub fn load_puzzle(path: &Path) -> Result<PuzzleDefinition> {
    let json =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read puzzle", e))?;
    parse_puzzle(&json)
}

/// Serialize a response as pretty-printed JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_response(response: &SolveResponse, mut writer: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, response).map_err(|source| SolverError::Json {
        context: "solution",
        source,
    })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a response to a JSON file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or the
/// response cannot be written
pub fn save_response(response: &SolveResponse, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    let file =
        std::fs::File::create(path).map_err(|e| file_system_error(path, "create output", e))?;
    write_response(response, std::io::BufWriter::new(file))
}
