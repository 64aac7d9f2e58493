use num_integer::Integer;
use num_rational::BigRational;

use crate::Matrix;

/// Submatrix obtained by deleting `row` and `col`, preserving the relative
/// order of the remaining rows and columns. Indices must be in bounds; the
/// expansion only ever passes row 0 and an in-range column.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix.clone().remove_row(row).remove_column(col)
}

/// Laplace expansion along the first row, with sign (-1)^col per column.
///
/// Total over square matrices of any size. O(n!) multiplications, which is
/// fine for the matrix sizes this crate serves.
pub(super) fn determinant(matrix: &Matrix) -> BigRational {
    let n = matrix.nrows();
    match n {
        1 => matrix[(0, 0)].clone(),
        // Same value the diagonal formula produces; spares one recursion level.
        2 => &matrix[(0, 0)] * &matrix[(1, 1)] - &matrix[(0, 1)] * &matrix[(1, 0)],
        _ => (0..n)
            .map(|col| {
                let term = &matrix[(0, col)] * determinant(&minor(matrix, 0, col));
                if col.is_even() {
                    term
                } else {
                    -term
                }
            })
            .sum(),
    }
}
