use num_rational::BigRational;

use super::{DeterminantError, TraceStep};
use crate::Matrix;

/// Closed-form determinant for 2x2 and 3x3 matrices.
///
/// 3x3 uses the Sarrus rule; the two partial sums land in `trace` for the
/// presentation layer before their difference is returned.
pub(super) fn determinant(
    matrix: &Matrix,
    trace: &mut Vec<TraceStep>,
) -> Result<BigRational, DeterminantError> {
    match matrix.nrows() {
        2 => {
            log::info!("Using the 2x2 diagonal formula: det = ad - bc");
            Ok(&matrix[(0, 0)] * &matrix[(1, 1)] - &matrix[(0, 1)] * &matrix[(1, 0)])
        }
        3 => {
            log::info!("Using the 3x3 Sarrus rule");
            let a = matrix;
            let downward = &a[(0, 0)] * &a[(1, 1)] * &a[(2, 2)]
                + &a[(0, 1)] * &a[(1, 2)] * &a[(2, 0)]
                + &a[(0, 2)] * &a[(1, 0)] * &a[(2, 1)];
            let upward = &a[(0, 2)] * &a[(1, 1)] * &a[(2, 0)]
                + &a[(0, 0)] * &a[(1, 2)] * &a[(2, 1)]
                + &a[(0, 1)] * &a[(1, 0)] * &a[(2, 2)];
            log::debug!("Downward sum: {downward}; upward sum: {upward}");
            trace.push(TraceStep::DiagonalSums {
                downward: downward.clone(),
                upward: upward.clone(),
            });
            Ok(downward - upward)
        }
        size => Err(DeterminantError::UnsupportedSize { size }),
    }
}
