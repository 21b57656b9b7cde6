//! # LU decomposition without pivoting
//!
//! Decompose a square matrix `A` into `A = LU` where
//!
//! * `L` is lower triangular with `1`'s on the diagonal
//! * `U` is upper triangular
//!
//! No rows are exchanged, so the decomposition fails as soon as a pivot is exactly zero, even if
//! the matrix is nonsingular. Callers can fall back to `SparseMatrix::inverse`, which pivots.
use log::debug;

use crate::data::linear_algebra::matrix::{require_square, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

/// The factors `L` and `U` of a square matrix `A = LU`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct LUDecomposition<F> {
    /// Lower triangular matrix `L`.
    ///
    /// Row major, the one's on the diagonal are stored explicitly.
    lower: SparseMatrix<F>,
    /// Upper triangular matrix `U`.
    upper: SparseMatrix<F>,
}

impl<F> LUDecomposition<F> {
    /// The unit lower triangular factor.
    pub fn lower(&self) -> &SparseMatrix<F> {
        &self.lower
    }

    /// The upper triangular factor.
    pub fn upper(&self) -> &SparseMatrix<F> {
        &self.upper
    }

    /// Take the factors `(L, U)` out.
    pub fn into_parts(self) -> (SparseMatrix<F>, SparseMatrix<F>) {
        (self.lower, self.upper)
    }
}

impl<F: Scalar> LUDecomposition<F> {
    /// Solve `LU x = b` by forward substitution followed by back substitution.
    ///
    /// The decomposition can be reused for many right hand sides.
    pub fn solve(&self, b: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let y = self.lower.forward_substitute(b)?;
        self.upper.back_substitute(&y)
    }
}

impl<F: Scalar> SparseMatrix<F> {
    /// Compute the factorization `A = LU` without exchanging rows.
    ///
    /// For each pivot row `i`, every row `k > i` with a value in column `i` gets a multiple of
    /// row `i` subtracted. The multiplier is stored in `L` at `(k, i)`.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the matrix is not square, `SingularPivot` if a pivot is exactly
    /// zero.
    pub fn lu_no_pivoting(&self) -> Result<LUDecomposition<F>, LinalgError> {
        let n = require_square("LU decomposition", self.shape())?;
        debug!("Computing LU decomposition of a {}x{} matrix with {} nonzeros", n, n, self.nnz());

        let mut upper = self.clone();
        let mut lower = SparseMatrix::identity(n);
        for i in 0..n {
            let pivot_row = upper.row_unchecked(i).clone();
            let pivot = pivot_row.get(i).ok_or(LinalgError::SingularPivot { index: i })?;

            for k in (i + 1)..n {
                let multiplier = match upper.row_unchecked(k).get(i) {
                    Some(value) => value.clone() / pivot,
                    None => continue,
                };

                let row = upper.row_unchecked_mut(k);
                row.add_multiple_of_row(&-multiplier.clone(), &pivot_row);
                // Exact for exact types, removes a rounding residue otherwise
                row.set_zero(i);
                lower.row_unchecked_mut(k).set(i, multiplier);
            }
        }

        debug!("LU decomposition done: {} nonzeros in L, {} in U", lower.nnz(), upper.nnz());
        debug_assert!(lower.is_lower_triangular() && upper.is_upper_triangular());

        Ok(LUDecomposition { lower, upper })
    }

    /// Solve `Ly = b` for a unit lower triangular matrix `L`.
    ///
    /// Values on the diagonal are not read; they are taken to be one.
    pub fn forward_substitute(&self, b: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let n = require_square("forward substitution", self.shape())?;
        if b.len() != n {
            return Err(LinalgError::dimension_mismatch("forward substitution", self.shape(), (b.len(), 1)));
        }

        let mut y: Vec<F> = Vec::with_capacity(n);
        for k in 0..n {
            let mut value = b[k].clone();
            for (j, coefficient) in self.row_unchecked(k).iter() {
                if *j < k {
                    value -= coefficient.clone() * &y[*j];
                }
            }
            y.push(value);
        }

        Ok(DenseVector::new(y, n))
    }

    /// Solve `Ux = y` for an upper triangular matrix `U`.
    ///
    /// Computes `x_k = (y_k - sum_{j > k} U_kj x_j) / U_kk` from the last row up.
    ///
    /// # Errors
    ///
    /// `SingularPivot` if a value on the diagonal is exactly zero.
    pub fn back_substitute(&self, y: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let n = require_square("back substitution", self.shape())?;
        if y.len() != n {
            return Err(LinalgError::dimension_mismatch("back substitution", self.shape(), (y.len(), 1)));
        }

        let mut x = DenseVector::zeros(n);
        for k in (0..n).rev() {
            let row = self.row_unchecked(k);
            let diagonal = row.get(k).ok_or(LinalgError::SingularPivot { index: k })?;

            let mut value = y[k].clone();
            for (j, coefficient) in row.iter() {
                if *j > k {
                    value -= coefficient.clone() * &x[*j];
                }
            }
            x[k] = value / diagonal;
        }

        Ok(x)
    }

    /// Solve `Ax = b` through `lu_no_pivoting`.
    ///
    /// # Errors
    ///
    /// As `lu_no_pivoting`, and `DimensionMismatch` if `b` has the wrong length. There is no
    /// automatic fallback to a pivoting method.
    pub fn solve(&self, b: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        if b.len() != self.nr_rows() {
            return Err(LinalgError::dimension_mismatch("solve", self.shape(), (b.len(), 1)));
        }

        self.lu_no_pivoting()?.solve(b)
    }
}
