use std::fmt;

use derive_more::IsVariant;
use num_rational::BigRational;
use serde::Serialize;

use crate::Matrix;

/// One observable step of a computation, in the order it happened. Purely
/// presentational: the sequence never affects the returned determinant.
#[derive(Debug, Clone, PartialEq, Serialize, IsVariant)]
pub enum TraceStep {
    /// Sarrus partial sums, emitted before their difference is returned.
    DiagonalSums {
        downward: BigRational,
        upward: BigRational,
    },
    /// Rows `row` and `other` were exchanged; negates the running determinant.
    RowSwap { row: usize, other: usize },
    /// `factor * (row source)` was subtracted from row `target` element-wise.
    RowCombination {
        factor: BigRational,
        source: usize,
        target: usize,
    },
    /// No nonzero pivot at or below the diagonal in this column.
    ZeroPivotColumn { column: usize },
    /// State of the working copy after the preceding operation.
    Snapshot { matrix: Matrix },
}

/// Classroom row-operation notation, rows 1-indexed.
impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagonalSums { downward, upward } => write!(
                f,
                "Sum of downward diagonals = {downward}\nSum of upward diagonals   = {upward}"
            ),
            Self::RowSwap { row, other } => {
                write!(f, "R{} <-> R{}    (row swap)", row + 1, other + 1)
            }
            Self::RowCombination {
                factor,
                source,
                target,
            } => write!(
                f,
                "{}(R{}) + R{} -> R{}    (row combination)",
                -factor,
                source + 1,
                target + 1,
                target + 1
            ),
            Self::ZeroPivotColumn { column } => write!(
                f,
                "No nonzero pivot in column {}; the determinant is 0",
                column + 1
            ),
            Self::Snapshot { matrix } => write!(f, "{matrix}"),
        }
    }
}
