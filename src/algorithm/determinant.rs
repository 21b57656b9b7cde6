//! # Determinant by cofactor expansion
//!
//! Expansion along the first row, visiting only the values that are stored. The cost is
//! factorial in the size for dense matrices, so this is only meant for small or very sparse
//! matrices.
use log::{debug, warn};

use crate::data::linear_algebra::matrix::{require_square, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::Vector;
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

/// Size above which the expansion is considered expensive.
const WARN_SIZE: usize = 10;

impl<F: Scalar> SparseMatrix<F> {
    /// Determinant of a square matrix.
    ///
    /// The empty matrix has determinant one.
    pub fn det(&self) -> Result<F, LinalgError> {
        let n = require_square("determinant", self.shape())?;
        if n > WARN_SIZE {
            warn!("Cofactor expansion of a {}x{} matrix, this may take very long", n, n);
        }
        debug!("Computing the determinant of a {}x{} matrix with {} nonzeros", n, n, self.nnz());

        if n == 0 {
            return Ok(F::one());
        }

        Ok(cofactor_expansion(self))
    }
}

fn cofactor_expansion<F: Scalar>(matrix: &SparseMatrix<F>) -> F {
    let first_row = matrix.row_unchecked(0);
    if matrix.nr_rows() == 1 {
        return first_row.get(0).cloned().unwrap_or_else(F::zero);
    }

    first_row.iter().fold(F::zero(), |total, (j, value)| {
        let term = value.clone() * cofactor_expansion(&matrix.minor(0, *j));
        if j % 2 == 0 {
            total + term
        } else {
            total - term
        }
    })
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::SparseMatrix;
    use crate::data::linear_algebra::vector::DenseVector;
    use crate::data::linear_algebra::vector::test::TestVector;
    use crate::data::number_types::rational::Rational64;
    use crate::error::LinalgError;
    use crate::R64;

    type T = Rational64;

    fn matrix(data: Vec<Vec<i64>>) -> SparseMatrix<T> {
        let rows = data.into_iter().map(DenseVector::from_test_data).collect::<Vec<_>>();
        SparseMatrix::from_vectors(&rows, false).unwrap()
    }

    #[test]
    fn small() {
        assert_eq!(SparseMatrix::<T>::new(0, 0).det().unwrap(), R64!(1));
        assert_eq!(matrix(vec![vec![5]]).det().unwrap(), R64!(5));
        assert_eq!(matrix(vec![vec![0]]).det().unwrap(), R64!(0));
        assert_eq!(matrix(vec![vec![1, 2], vec![3, 2]]).det().unwrap(), R64!(-4));
        assert_eq!(matrix(vec![vec![1, 2], vec![3, 4]]).det().unwrap(), R64!(-2));
    }

    #[test]
    fn larger() {
        let a = matrix(vec![vec![2, 1, 1], vec![4, -6, 0], vec![-2, 7, 2]]);
        assert_eq!(a.det().unwrap(), R64!(-16));

        // Zero leading value
        let a = matrix(vec![vec![0, 1, 2], vec![1, 0, 3], vec![4, -3, 8]]);
        assert_eq!(a.det().unwrap(), R64!(-1 * (8 - 12) + 2 * (-3)));

        let a = matrix(vec![
            vec![1, 0, 0, 2],
            vec![0, 3, 0, 0],
            vec![0, 0, 4, 0],
            vec![5, 0, 0, 6],
        ]);
        assert_eq!(a.det().unwrap(), R64!(12 * (6 - 10)));
    }

    #[test]
    fn product_of_lu_diagonal() {
        let a = matrix(vec![vec![2, 1, 1], vec![4, -6, 0], vec![-2, 7, 2]]);
        let upper_diagonal = a.lu_no_pivoting().unwrap().upper().diagonal();
        let product = upper_diagonal.data.into_iter().fold(R64!(1), |total, value| total * value);
        assert_eq!(a.det().unwrap(), product);
    }

    #[test]
    fn singular_and_non_square() {
        assert_eq!(matrix(vec![vec![1, 2], vec![2, 4]]).det().unwrap(), R64!(0));
        assert_eq!(SparseMatrix::<T>::new(3, 3).det().unwrap(), R64!(0));
        assert!(matches!(
            matrix(vec![vec![1, 2, 3]]).det(),
            Err(LinalgError::DimensionMismatch { .. }),
        ));
    }
}
