//! Error types for puzzle configuration and solver I/O

use std::fmt;
use std::path::PathBuf;

use crate::model::constraint::ConstraintKind;
use crate::spatial::grid::Cell;

/// Main error type for all solver operations
///
/// Search exhaustion is not represented here: a puzzle without a solution is
/// a normal outcome reported by the search engine, not a fault.
#[derive(Debug)]
pub enum SolverError {
    /// Grid size is zero or above the supported maximum
    InvalidGridSize {
        /// Requested grid size
        size: usize,
        /// Explanation of why the size is rejected
        reason: String,
    },

    /// Constraint type requires an operand but none was given
    MissingOperand {
        /// Constraint type that needs the operand
        kind: ConstraintKind,
    },

    /// Constraint type name is not one of the known tags
    UnknownConstraintKind {
        /// The unrecognised name as it appeared in the input
        name: String,
    },

    /// Constraint declares no cells at all
    EmptyRegion {
        /// Position of the constraint in the puzzle definition
        constraint: usize,
    },

    /// Constraint region references a cell outside the grid
    RegionOutOfBounds {
        /// Position of the constraint in the puzzle definition
        constraint: usize,
        /// The offending cell
        cell: Cell,
        /// Grid size the cell was checked against
        grid_size: usize,
    },

    /// Puzzle or solution JSON could not be (de)serialized
    Json {
        /// What was being read or written
        context: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Failed to save a rendered solution to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { size, reason } => {
                write!(f, "Invalid grid size {size}: {reason}")
            }
            Self::MissingOperand { kind } => {
                write!(f, "Constraint {kind} requires an operand")
            }
            Self::UnknownConstraintKind { name } => {
                write!(f, "Unsupported constraint type: '{name}'")
            }
            Self::EmptyRegion { constraint } => {
                write!(f, "Constraint #{constraint} has an empty region")
            }
            Self::RegionOutOfBounds {
                constraint,
                cell,
                grid_size,
            } => {
                write!(
                    f,
                    "Constraint #{constraint} references cell {cell} outside the {grid_size}x{grid_size} grid"
                )
            }
            Self::Json { context, source } => {
                write!(f, "Failed to process {context} JSON: {source}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it occurred on
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> SolverError {
    SolverError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
