//! Region-scoped puzzle constraints

use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, SolverError};
use crate::spatial::grid::Cell;

/// Rule applied to the pip values covering a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// All values identical
    Equal,
    /// All values pairwise distinct
    NotEqual,
    /// Every value strictly above the operand
    GreaterThan,
    /// Every value strictly below the operand
    LessThan,
    /// Values add up to exactly the operand
    Sum,
    /// Always satisfied
    Blank,
}

impl ConstraintKind {
    /// Every constraint type
    pub const ALL: [Self; 6] = [
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThan,
        Self::LessThan,
        Self::Sum,
        Self::Blank,
    ];

    /// Whether the rule reads the operand
    pub const fn requires_operand(self) -> bool {
        matches!(self, Self::GreaterThan | Self::LessThan | Self::Sum)
    }

    /// Tag name as used in puzzle files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::Sum => "SUM",
            Self::Blank => "BLANK",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConstraintKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SolverError::UnknownConstraintKind {
                name: s.to_string(),
            })
    }
}

/// One rule over an ordered region of cells
///
/// Immutable once built. Holds no grid state; evaluation lives in
/// [`crate::algorithm::evaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    kind: ConstraintKind,
    operand: Option<i32>,
    region: Vec<Cell>,
}

impl Constraint {
    /// Build a constraint, checking that operand-reading rules have one
    ///
    /// An operand given to a rule that ignores it is kept but never read.
    ///
    /// # Errors
    ///
    /// Returns `MissingOperand` if `kind` needs an operand and none is given
    pub fn new(kind: ConstraintKind, operand: Option<i32>, region: Vec<Cell>) -> Result<Self> {
        if kind.requires_operand() && operand.is_none() {
            return Err(SolverError::MissingOperand { kind });
        }
        Ok(Self {
            kind,
            operand,
            region,
        })
    }

    /// All values in the region must be identical
    pub const fn equal(region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::Equal, None, region)
    }

    /// All values in the region must be pairwise distinct
    pub const fn not_equal(region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::NotEqual, None, region)
    }

    /// Every value in the region must exceed `bound`
    pub const fn greater_than(bound: i32, region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::GreaterThan, Some(bound), region)
    }

    /// Every value in the region must be below `bound`
    pub const fn less_than(bound: i32, region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::LessThan, Some(bound), region)
    }

    /// Values in the region must add up to `total`
    pub const fn sum(total: i32, region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::Sum, Some(total), region)
    }

    /// Placeholder rule that always holds
    pub const fn blank(region: Vec<Cell>) -> Self {
        Self::unchecked(ConstraintKind::Blank, None, region)
    }

    const fn unchecked(kind: ConstraintKind, operand: Option<i32>, region: Vec<Cell>) -> Self {
        Self {
            kind,
            operand,
            region,
        }
    }

    /// Rule type
    pub const fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Operand, if one was given
    pub const fn operand(&self) -> Option<i32> {
        self.operand
    }

    /// Cells the rule is scoped to, in declaration order
    pub fn region(&self) -> &[Cell] {
        &self.region
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(operand) = self.operand {
            write!(f, " {operand}")?;
        }
        write!(f, " over {} cells", self.region.len())
    }
}
