use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn int(value: i64) -> BigRational {
    BigRational::from_integer(value.into())
}

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(numer.into(), denom.into())
}

fn matrix(n: usize, entries: &[i64]) -> Matrix {
    Matrix::from_row_iterator(n, n, entries.iter().copied().map(int))
}

fn identity(n: usize) -> Matrix {
    Matrix::from_fn(n, n, |i, j| if i == j { int(1) } else { int(0) })
}

fn det(method: Method, matrix: &Matrix) -> BigRational {
    method.compute(matrix).unwrap().determinant
}

const ALL_METHODS: [Method; 4] = [
    Method::Diagonal,
    Method::Definition,
    Method::RowReduction,
    Method::Cofactor,
];

// Every method except Diagonal, which is limited to 2x2 and 3x3.
const GENERAL_METHODS: [Method; 3] = [Method::Definition, Method::RowReduction, Method::Cofactor];

#[test]
fn literal_2x2_diagonal_matrix() {
    let m = matrix(2, &[2, 0, 0, 3]);
    for method in ALL_METHODS {
        assert_eq!(det(method, &m), int(6), "{method}");
    }
}

#[test]
fn literal_singular_3x3() {
    // Row 3 = 2 * row 2 - row 1.
    let m = matrix(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    for method in ALL_METHODS {
        assert_eq!(det(method, &m), int(0), "{method}");
    }
}

#[test]
fn literal_nonsingular_3x3() {
    let m = matrix(3, &[1, 2, 3, 4, 5, 6, 7, 8, 10]);
    for method in ALL_METHODS {
        assert_eq!(det(method, &m), int(-3), "{method}");
    }
}

#[test]
fn literal_4x4_diagonal_matrix() {
    let m = matrix(4, &[1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 0, 4]);
    assert_eq!(det(Method::Definition, &m), int(24));
    assert_eq!(det(Method::RowReduction, &m), int(24));
}

#[test]
fn literal_antidiagonal_2x2_needs_one_row_swap() {
    let m = matrix(2, &[0, 1, 1, 0]);
    assert_eq!(det(Method::Diagonal, &m), int(-1));

    let computation = Method::RowReduction.compute(&m).unwrap();
    assert_eq!(computation.determinant, int(-1));
    assert_eq!(
        computation
            .trace
            .iter()
            .filter(|step| step.is_row_swap())
            .count(),
        1
    );
}

#[test]
fn rational_entries_stay_exact() {
    let m = Matrix::from_row_iterator(
        2,
        2,
        [ratio(1, 2), ratio(1, 3), ratio(1, 4), ratio(1, 5)],
    );
    // 1/10 - 1/12, with no floating drift.
    for method in ALL_METHODS {
        assert_eq!(det(method, &m), ratio(1, 60), "{method}");
    }
}

#[test]
fn identity_has_determinant_one_for_each_size() {
    for n in 2..=5 {
        let m = identity(n);
        for method in GENERAL_METHODS {
            assert_eq!(det(method, &m), int(1), "{method}, n = {n}");
        }
        if n <= 3 {
            assert_eq!(det(Method::Diagonal, &m), int(1), "n = {n}");
        }
    }
}

#[test]
fn zero_row_short_circuits_row_reduction() {
    let m = matrix(3, &[1, 2, 3, 0, 0, 0, 7, 8, 9]);
    let computation = Method::RowReduction.compute(&m).unwrap();
    assert_eq!(computation.determinant, int(0));
    assert!(computation
        .trace
        .iter()
        .any(|step| step.is_zero_pivot_column()));
    for method in GENERAL_METHODS {
        assert_eq!(det(method, &m), int(0), "{method}");
    }
}

#[test]
fn identical_rows_are_singular() {
    let m = matrix(4, &[1, 2, 3, 4, 5, 6, 7, 8, 1, 2, 3, 4, 9, 1, 2, 3]);
    for method in GENERAL_METHODS {
        assert_eq!(det(method, &m), int(0), "{method}");
    }
}

#[test]
fn proportional_rows_are_singular() {
    // Row 2 = 3/2 * row 1.
    let m = Matrix::from_row_iterator(2, 2, [int(2), int(4), int(3), int(6)]);
    for method in ALL_METHODS {
        assert_eq!(det(method, &m), int(0), "{method}");
    }
}

#[test]
fn diagonal_method_rejects_other_sizes() {
    for n in [4, 5] {
        let err = Method::Diagonal.compute(&identity(n)).unwrap_err();
        assert_eq!(err, DeterminantError::UnsupportedSize { size: n });
        assert!(err.is_unsupported_size());
    }
}

#[test]
fn sarrus_partial_sums_are_reported() {
    let m = matrix(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let computation = Method::Diagonal.compute(&m).unwrap();
    assert_eq!(
        computation.trace,
        vec![TraceStep::DiagonalSums {
            downward: int(225),
            upward: int(225),
        }]
    );
}

#[test]
fn definition_and_cofactor_produce_no_trace() {
    let m = matrix(3, &[1, 2, 3, 4, 5, 6, 7, 8, 10]);
    assert_eq!(Method::Definition.compute(&m).unwrap().trace, vec![]);
    assert_eq!(Method::Cofactor.compute(&m).unwrap().trace, vec![]);
}

#[test]
fn row_reduction_does_not_mutate_the_callers_matrix() {
    let m = matrix(3, &[0, 2, 3, 4, 5, 6, 7, 8, 10]);
    let before = m.clone();
    Method::RowReduction.compute(&m).unwrap();
    assert_eq!(m, before);
}

#[test]
fn minor_deletes_one_row_and_one_column_in_order() {
    let m = matrix(3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(minor(&m, 0, 0), matrix(2, &[5, 6, 8, 9]));
    assert_eq!(minor(&m, 0, 1), matrix(2, &[4, 6, 7, 9]));
    assert_eq!(minor(&m, 2, 2), matrix(2, &[1, 2, 4, 5]));
}

#[test]
fn invalid_selection_indices_never_become_methods() {
    assert_eq!(Method::try_from(2), Ok(Method::RowReduction));
    assert_eq!(Method::try_from(4), Err(InvalidSelection { choice: 4 }));
    assert_eq!(Method::try_from(255), Err(InvalidSelection { choice: 255 }));
}

proptest! {
    #[test]
    fn all_methods_agree_on_2x2(entries in proptest::collection::vec(-9i64..=9, 4)) {
        let m = matrix(2, &entries);
        let expected = det(Method::Definition, &m);
        for method in ALL_METHODS {
            prop_assert_eq!(&det(method, &m), &expected, "{}", method);
        }
    }

    #[test]
    fn all_methods_agree_on_3x3(entries in proptest::collection::vec(-9i64..=9, 9)) {
        let m = matrix(3, &entries);
        let expected = det(Method::Definition, &m);
        for method in ALL_METHODS {
            prop_assert_eq!(&det(method, &m), &expected, "{}", method);
        }
    }

    #[test]
    fn general_methods_agree_on_4x4(entries in proptest::collection::vec(-9i64..=9, 16)) {
        let m = matrix(4, &entries);
        let expected = det(Method::Definition, &m);
        for method in GENERAL_METHODS {
            prop_assert_eq!(&det(method, &m), &expected, "{}", method);
        }
    }

    #[test]
    fn general_methods_agree_on_5x5(entries in proptest::collection::vec(-9i64..=9, 25)) {
        let m = matrix(5, &entries);
        let expected = det(Method::Definition, &m);
        for method in GENERAL_METHODS {
            prop_assert_eq!(&det(method, &m), &expected, "{}", method);
        }
    }

    #[test]
    fn swapping_two_rows_negates_the_determinant(
        entries in proptest::collection::vec(-9i64..=9, 9),
        rows in (0usize..3, 0usize..3),
    ) {
        prop_assume!(rows.0 != rows.1);
        let m = matrix(3, &entries);
        let mut swapped = m.clone();
        swapped.swap_rows(rows.0, rows.1);

        for method in [Method::Definition, Method::RowReduction] {
            prop_assert_eq!(det(method, &swapped), -det(method, &m), "{}", method);
        }
    }

    #[test]
    fn scaling_a_row_scales_the_determinant(
        entries in proptest::collection::vec(-9i64..=9, 9),
        row in 0usize..3,
        k in -5i64..=5,
    ) {
        let m = matrix(3, &entries);
        let k = int(k);
        let mut scaled = m.clone();
        scaled.row_mut(row).apply(|el| *el *= &k);

        prop_assert_eq!(det(Method::Definition, &scaled), det(Method::Definition, &m) * k);
    }
}
