use lazy_static::lazy_static;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::TraceStep;
use crate::{dbg_display, Matrix};

lazy_static! {
    static ref ZERO: BigRational = BigRational::zero();
}

/// Gaussian elimination to upper-triangular form over a private working
/// copy; the caller's matrix is left untouched.
///
/// The running determinant starts at 1, is negated on every row swap and
/// multiplied by the diagonal product at the end. A column with no nonzero
/// pivot candidate short-circuits to an exact 0. Every arithmetic step stays
/// in exact rational arithmetic.
pub(super) fn determinant(matrix: &Matrix, trace: &mut Vec<TraceStep>) -> BigRational {
    let mut a = matrix.clone();
    let n = a.nrows();
    let mut running = BigRational::one();

    log::debug!("Initial working copy:{a}");
    trace.push(TraceStep::Snapshot { matrix: a.clone() });

    for i in 0..n {
        if a[(i, i)] == *ZERO {
            if let Some(k) = (i + 1..n).find(|&k| a[(k, i)] != *ZERO) {
                a.swap_rows(i, k);
                running = -running;
                log::info!("Swapped rows {i} and {k}");
                trace.push(TraceStep::RowSwap { row: i, other: k });
                trace.push(TraceStep::Snapshot { matrix: a.clone() });
            }
        }

        // Still zero after the search: the triangular product is 0 anyway.
        if a[(i, i)] == *ZERO {
            log::info!("No nonzero pivot in column {i}; the determinant is 0");
            trace.push(TraceStep::ZeroPivotColumn { column: i });
            return BigRational::zero();
        }

        for j in i + 1..n {
            let factor = dbg_display!(&a[(j, i)] / &a[(i, i)]);
            if factor == *ZERO {
                continue;
            }
            let pivot_row = a.row(i).into_owned();
            a.row_mut(j)
                .zip_apply(&pivot_row, |el, pivot_el| *el -= pivot_el * &factor);
            trace.push(TraceStep::RowCombination {
                factor,
                source: i,
                target: j,
            });
            trace.push(TraceStep::Snapshot { matrix: a.clone() });
        }
    }

    log::debug!("Upper triangular form:{a}");
    running * a.diagonal().iter().product::<BigRational>()
}
