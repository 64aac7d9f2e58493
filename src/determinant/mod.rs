mod diagonal;
mod laplace;
mod row_reduction;
mod trace;

#[cfg(test)]
mod tests;

use derive_more::{Display, Error, IsVariant};
use derive_new::new;
use num_rational::BigRational;
use serde::{Deserialize, Serialize};

pub use laplace::minor;
pub use trace::TraceStep;

use crate::Matrix;

/// Selectable determinant algorithms, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant, Serialize, Deserialize)]
pub enum Method {
    #[display(fmt = "Diagonal Method (2x2 or 3x3)")]
    Diagonal,
    #[display(fmt = "Determinant by Definition")]
    Definition,
    #[display(fmt = "Using Determinant Rules (Row Reduction)")]
    RowReduction,
    #[display(fmt = "Cofactor Expansion")]
    Cofactor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum DeterminantError {
    #[display(
        fmt = "the diagonal method only supports 2x2 and 3x3 matrices, got {0}x{0}",
        size
    )]
    UnsupportedSize { size: usize },
}

/// Method index outside the menu range; resolved by the caller, never
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid method choice {}, expected 0 to 3", choice)]
pub struct InvalidSelection {
    pub choice: u8,
}

impl TryFrom<u8> for Method {
    type Error = InvalidSelection;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        match choice {
            0 => Ok(Self::Diagonal),
            1 => Ok(Self::Definition),
            2 => Ok(Self::RowReduction),
            3 => Ok(Self::Cofactor),
            _ => Err(InvalidSelection { choice }),
        }
    }
}

/// Exact determinant plus the ordered, purely observational step trace.
/// Only the diagonal and row-reduction methods produce steps.
#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct Computation {
    pub determinant: BigRational,
    pub trace: Vec<TraceStep>,
}

impl Method {
    /// Computes the determinant of a well-formed square matrix. The input is
    /// never mutated; row reduction works on its own copy, so the same
    /// matrix can be handed to several methods for cross-checking.
    pub fn compute(self, matrix: &Matrix) -> Result<Computation, DeterminantError> {
        debug_assert_eq!(matrix.nrows(), matrix.ncols());
        log::info!(
            "Computing the determinant of a {}x{} matrix with: {self}",
            matrix.nrows(),
            matrix.ncols()
        );

        let mut trace = Vec::new();
        let determinant = match self {
            Self::Diagonal => diagonal::determinant(matrix, &mut trace)?,
            Self::Definition | Self::Cofactor => laplace::determinant(matrix),
            Self::RowReduction => row_reduction::determinant(matrix, &mut trace),
        };
        Ok(Computation::new(determinant, trace))
    }
}
