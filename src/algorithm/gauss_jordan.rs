//! # Gauss-Jordan elimination
//!
//! Inversion, row reduction and the routines built on top of it. A pivot is only exchanged when
//! it is exactly zero; the replacement is the candidate below it of largest magnitude.
use log::{debug, trace};

use crate::data::linear_algebra::matrix::{require_square, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

impl<F: Scalar> SparseMatrix<F> {
    /// Inverse of a square matrix, computed with Gauss-Jordan elimination on the matrix augmented
    /// with the identity.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrix is not square, `SingularMatrix` if it has no inverse.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let n = require_square("inverse", self.shape())?;
        debug!("Inverting a {}x{} matrix with {} nonzeros", n, n, self.nnz());

        let mut work = self.clone();
        let mut inverse = SparseMatrix::identity(n);
        eliminate(&mut work, Some(&mut inverse), n)?;

        debug!("Inverse has {} nonzeros", inverse.nnz());
        Ok(inverse)
    }

    /// Inverse without row exchanges.
    ///
    /// # Errors
    ///
    /// Always `UnsupportedOperation`: sparse matrices are only inverted with pivoting, see
    /// `inverse`.
    pub fn inverse_no_pivoting(&self) -> Result<Self, LinalgError> {
        Err(LinalgError::UnsupportedOperation {
            operation: "inversion without pivoting",
            structure: "sparse matrix",
        })
    }

    /// Reduced row echelon form of an `m x n` matrix with `n >= m`.
    ///
    /// Each of the first `m` columns ends up with a single one on the diagonal and zeros
    /// elsewhere.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if there are more rows than columns, `SingularMatrix` if one of the
    /// first `m` columns has no pivot.
    pub fn reduce(&self) -> Result<Self, LinalgError> {
        let (m, n) = self.shape();
        if n < m {
            return Err(LinalgError::dimension_mismatch("reduce", self.shape(), (m, m)));
        }
        debug!("Reducing a {}x{} matrix", m, n);

        let mut work = self.clone();
        eliminate(&mut work, None, m)?;

        Ok(work)
    }

    /// Solve `Ax = b` by reducing `A` with `b` appended as an extra column.
    ///
    /// The solution is the appended column after reduction. For a matrix with more columns than
    /// rows, these are the values of the first `m` variables when the others are zero.
    pub fn solve_by_reduction(&self, b: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let reduced = self.with_column(b)?.reduce()?;

        reduced.get_column(self.nr_columns())
    }

    /// A nonzero vector `v` with `Av = 0` for an `m x (m + 1)` matrix of rank `m`.
    ///
    /// After reduction the last column holds `-v` restricted to the first `m` variables; the
    /// free variable is set to one. Matrices with more than one free variable are not supported.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` unless there is exactly one more column than there are rows,
    /// `SingularMatrix` if the rank is too low.
    pub fn nullspace(&self) -> Result<DenseVector<F>, LinalgError> {
        let (m, n) = self.shape();
        if n != m + 1 {
            return Err(LinalgError::dimension_mismatch("nullspace", self.shape(), (m, m + 1)));
        }

        let reduced = self.reduce()?;
        let mut vector = -reduced.get_column(m)?;
        vector.push_value(F::one());

        Ok(vector)
    }
}

/// Gauss-Jordan elimination on the first `nr_pivots` columns.
///
/// # Arguments
///
/// * `work`: Matrix to reduce.
/// * `companion`: Matrix that undergoes the same row operations, if any.
/// * `nr_pivots`: Number of pivots, at most the number of rows of `work`.
fn eliminate<F: Scalar>(
    work: &mut SparseMatrix<F>,
    mut companion: Option<&mut SparseMatrix<F>>,
    nr_pivots: usize,
) -> Result<(), LinalgError> {
    debug_assert!(nr_pivots <= work.nr_rows() && nr_pivots <= work.nr_columns());

    let nr_rows = work.nr_rows();
    for i in 0..nr_pivots {
        if work.row_unchecked(i).get(i).is_none() {
            let k = largest_below(work, i).ok_or(LinalgError::SingularMatrix { column: i })?;
            trace!("Swapping rows {} and {} for a nonzero pivot", i, k);
            work.swap_rows(i, k);
            if let Some(companion) = companion.as_deref_mut() {
                companion.swap_rows(i, k);
            }
        }

        let pivot = work.row_unchecked(i).get(i).cloned()
            .ok_or(LinalgError::SingularMatrix { column: i })?;
        work.row_unchecked_mut(i).element_wise_divide(&pivot);
        // Exact for exact types, removes a rounding residue otherwise
        work.row_unchecked_mut(i).set(i, F::one());
        if let Some(companion) = companion.as_deref_mut() {
            companion.row_unchecked_mut(i).element_wise_divide(&pivot);
        }

        let pivot_row = work.row_unchecked(i).clone();
        let companion_pivot_row = companion.as_deref().map(|companion| companion.row_unchecked(i).clone());
        for k in (0..nr_rows).filter(|&k| k != i) {
            let factor = match work.row_unchecked(k).get(i) {
                Some(value) => -value.clone(),
                None => continue,
            };

            let row = work.row_unchecked_mut(k);
            row.add_multiple_of_row(&factor, &pivot_row);
            row.set_zero(i);
            if let (Some(companion), Some(pivot_row)) = (companion.as_deref_mut(), &companion_pivot_row) {
                companion.row_unchecked_mut(k).add_multiple_of_row(&factor, pivot_row);
            }
        }
        trace!("Pivot {} done, {} nonzeros remaining", i, work.nnz());
    }

    Ok(())
}

/// Row below `i` with the largest value in column `i`, if any value is there at all.
///
/// Ties are broken in favour of the first row.
fn largest_below<F: Scalar>(matrix: &SparseMatrix<F>, i: usize) -> Option<usize> {
    let mut best: Option<(usize, F::Magnitude)> = None;
    for k in (i + 1)..matrix.nr_rows() {
        if let Some(value) = matrix.row_unchecked(k).get(i) {
            let magnitude = value.magnitude();
            if best.as_ref().map_or(true, |(_, largest)| magnitude > *largest) {
                best = Some((k, magnitude));
            }
        }
    }

    best.map(|(k, _)| k)
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
    use crate::data::linear_algebra::vector::{DenseVector, Vector};
    use crate::data::linear_algebra::vector::test::TestVector;
    use crate::data::number_types::rational::Rational64;
    use crate::error::LinalgError;
    use crate::R64;

    use super::largest_below;

    type T = Rational64;

    fn matrix(data: Vec<Vec<i64>>) -> SparseMatrix<T> {
        let rows = data.into_iter().map(DenseVector::from_test_data).collect::<Vec<_>>();
        SparseMatrix::from_vectors(&rows, false).unwrap()
    }

    #[test]
    fn inverse_2x2() {
        let a = matrix(vec![vec![1, 2], vec![3, 2]]);
        let inverse = a.inverse().unwrap();

        let expected = SparseMatrix::from_triplets(2, 2, vec![
            (0, 0, R64!(-1, 2)), (0, 1, R64!(1, 2)),
            (1, 0, R64!(3, 4)), (1, 1, R64!(-1, 4)),
        ]).unwrap();
        assert_eq!(inverse, expected);
        assert_eq!((&inverse * &a).unwrap(), SparseMatrix::identity(2));
        assert_eq!((&a * &inverse).unwrap(), SparseMatrix::identity(2));
    }

    #[test]
    fn inverse_with_row_swap() {
        let a = matrix(vec![vec![0, 1, 2], vec![1, 0, 3], vec![4, -3, 8]]);
        assert!(a.lu_no_pivoting().is_err());

        let inverse = a.inverse().unwrap();
        assert_eq!((&inverse * &a).unwrap(), SparseMatrix::identity(3));
    }

    #[test]
    fn inverse_singular() {
        let a = matrix(vec![vec![1, 2], vec![2, 4]]);
        assert!(matches!(a.inverse(), Err(LinalgError::SingularMatrix { column: 1 })));

        let a = matrix(vec![vec![0, 1], vec![0, 1]]);
        assert!(matches!(a.inverse(), Err(LinalgError::SingularMatrix { column: 0 })));

        let a = matrix(vec![vec![1, 2, 3]]);
        assert!(matches!(a.inverse(), Err(LinalgError::DimensionMismatch { .. })));
    }

    #[test]
    fn inverse_no_pivoting() {
        let a = matrix(vec![vec![1, 2], vec![3, 2]]);
        assert!(matches!(a.inverse_no_pivoting(), Err(LinalgError::UnsupportedOperation { .. })));
    }

    #[test]
    fn one_by_one() {
        let a = matrix(vec![vec![4]]);
        assert_eq!(a.inverse().unwrap().get(0, 0).unwrap(), R64!(1, 4));
        assert_eq!(a.reduce().unwrap(), SparseMatrix::identity(1));
    }

    #[test]
    fn pivot_choice() {
        let a = matrix(vec![vec![0, 1], vec![-3, 0], vec![5, 0], vec![-5, 1]]);
        assert_eq!(largest_below(&a, 0), Some(2));
        assert_eq!(largest_below(&a, 1), Some(3));
        assert_eq!(largest_below(&a, 3), None);
    }

    #[test]
    fn reduce() {
        let a = matrix(vec![vec![2, 4, 2], vec![1, 3, 4]]);
        let reduced = a.reduce().unwrap();
        assert_eq!(reduced, matrix(vec![vec![1, 0, -5], vec![0, 1, 3]]));

        let tall = matrix(vec![vec![1], vec![2]]);
        assert!(matches!(tall.reduce(), Err(LinalgError::DimensionMismatch { .. })));
    }

    #[test]
    fn solve_by_reduction() {
        let a = matrix(vec![vec![1, 2], vec![3, 2]]);
        let b = DenseVector::<T>::from_test_data(vec![8, 7]);
        let x = a.solve_by_reduction(&b).unwrap();
        assert_eq!(x, DenseVector::new(vec![R64!(-1, 2), R64!(17, 4)], 2));
        assert_eq!(x, a.solve(&b).unwrap());
    }

    #[test]
    fn nullspace() {
        let a = matrix(vec![vec![1, 0, 2], vec![0, 1, -1]]);
        let v = a.nullspace().unwrap();
        assert_eq!(v, DenseVector::from_test_data(vec![-2, 1, 1]));
        assert!((&a * &v).unwrap().is_zero());

        let a = matrix(vec![vec![2, 1, 1, 3], vec![4, -6, 0, 1], vec![-2, 7, 2, 0]]);
        let v = a.nullspace().unwrap();
        assert_eq!(v.len(), 4);
        assert!((&a * &v).unwrap().is_zero());

        let square = matrix(vec![vec![1, 0], vec![0, 1]]);
        assert!(matches!(square.nullspace(), Err(LinalgError::DimensionMismatch { .. })));
    }
}
