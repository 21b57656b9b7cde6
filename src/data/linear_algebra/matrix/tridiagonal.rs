//! # Symmetric tridiagonal matrices
//!
//! Only the main diagonal and the first off-diagonal are stored, so storage, solving and the
//! determinant are all linear in the size. Operations that would leave the tridiagonal structure
//! fail with `UnsupportedOperation`.
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

use log::trace;

use crate::data::linear_algebra::matrix::{check_index, DenseMatrix, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

const STRUCTURE: &str = "symmetric tridiagonal matrix";

/// Square matrix with nonzero values only on the main diagonal and directly next to it, where
/// value (i, i + 1) equals value (i + 1, i).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymmetricTridiagonal<F> {
    diagonal: DenseVector<F>,
    off_diagonal: DenseVector<F>,
}

impl<F: Scalar> SymmetricTridiagonal<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `diagonal`: Main diagonal, of length `n` at least one.
    /// * `off_diagonal`: Values (i, i + 1), of length `n - 1`.
    pub fn new(diagonal: DenseVector<F>, off_diagonal: DenseVector<F>) -> Result<Self, LinalgError> {
        if diagonal.is_empty() || off_diagonal.len() + 1 != diagonal.len() {
            return Err(LinalgError::dimension_mismatch(
                "symmetric tridiagonal construction",
                (diagonal.len(), 1),
                (off_diagonal.len(), 1),
            ));
        }

        Ok(Self { diagonal, off_diagonal })
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> &DenseVector<F> {
        &self.diagonal
    }

    /// The values (i, i + 1) for all i.
    pub fn off_diagonal(&self) -> &DenseVector<F> {
        &self.off_diagonal
    }

    fn len(&self) -> usize {
        self.diagonal.len()
    }

    /// Change a value inside the band.
    ///
    /// Setting (i, i + 1) also sets (i + 1, i).
    ///
    /// # Errors
    ///
    /// `UnsupportedOperation` when a nonzero value is set outside of the band. Setting zero
    /// there changes nothing and succeeds.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), LinalgError> {
        check_index(self.shape(), i, j)?;

        match (i, j) {
            _ if i == j => self.diagonal[i] = value,
            _ if i + 1 == j => self.off_diagonal[i] = value,
            _ if j + 1 == i => self.off_diagonal[j] = value,
            _ if value.is_zero() => (),
            _ => return Err(LinalgError::UnsupportedOperation {
                operation: "setting a value outside of the band",
                structure: STRUCTURE,
            }),
        }

        Ok(())
    }

    /// Solve `A x = d` with the Thomas algorithm.
    ///
    /// A forward sweep eliminates the values below the diagonal, after which back substitution
    /// gives the solution.
    ///
    /// # Errors
    ///
    /// `SingularPivot` with the index of the first elimination step that divides by zero, and
    /// `DimensionMismatch` if `d` has the wrong length.
    pub fn solve(&self, d: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let n = self.len();
        if d.len() != n {
            return Err(LinalgError::dimension_mismatch("tridiagonal solve", self.shape(), (d.len(), 1)));
        }

        // Modified super-diagonal and right hand side
        let mut c = Vec::with_capacity(n - 1);
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            let mut denominator = self.diagonal[i].clone();
            let mut rhs = d[i].clone();
            if i > 0 {
                let below: &F = &self.off_diagonal[i - 1];
                denominator -= below.clone() * &c[i - 1];
                rhs -= below.clone() * &y[i - 1];
            }
            if denominator.is_zero() {
                return Err(LinalgError::SingularPivot { index: i });
            }

            if i < n - 1 {
                c.push(self.off_diagonal[i].clone() / &denominator);
            }
            y.push(rhs / denominator);
        }
        trace!("Forward sweep of tridiagonal solve done for size {}", n);

        let mut x = y;
        for i in (0..n - 1).rev() {
            let next = x[i + 1].clone();
            x[i] -= c[i].clone() * next;
        }

        Ok(DenseVector::new(x, n))
    }

    /// Determinant using the three term recurrence.
    ///
    /// With `det(-1) = 1`, `det(k) = a_k det(k - 1) - b_{k - 1}^2 det(k - 2)` where `a` is the
    /// diagonal and `b` the off-diagonal.
    pub fn det(&self) -> F {
        let mut before_previous = F::one();
        let mut previous = self.diagonal[0].clone();
        for k in 1..self.len() {
            let b = &self.off_diagonal[k - 1];
            let current = self.diagonal[k].clone() * &previous - b.clone() * b * &before_previous;
            before_previous = previous;
            previous = current;
        }

        previous
    }

    /// Multiply with a vector.
    pub fn multiply_vector(&self, x: &DenseVector<F>) -> Result<DenseVector<F>, LinalgError> {
        let n = self.len();
        if x.len() != n {
            return Err(LinalgError::dimension_mismatch("tridiagonal multiplication", self.shape(), (x.len(), 1)));
        }

        Ok((0..n)
            .map(|i| {
                let mut total = self.diagonal[i].clone() * &x[i];
                if i > 0 {
                    total += self.off_diagonal[i - 1].clone() * &x[i - 1];
                }
                if i < n - 1 {
                    total += self.off_diagonal[i].clone() * &x[i + 1];
                }
                total
            })
            .collect())
    }

    /// General sparse representation.
    pub fn to_sparse(&self) -> SparseMatrix<F> {
        let n = self.len();
        let rows = (0..n)
            .map(|i| {
                let mut row = SparseVector::empty(n);
                if i > 0 {
                    row.set(i - 1, self.off_diagonal[i - 1].clone());
                }
                row.set(i, self.diagonal[i].clone());
                if i < n - 1 {
                    row.set(i + 1, self.off_diagonal[i].clone());
                }
                row
            })
            .collect();

        SparseMatrix::from_rows_unchecked(rows, n)
    }

    /// Principal submatrix on a contiguous, nonempty range of indices.
    ///
    /// The result is again symmetric tridiagonal.
    pub fn slice(&self, range: Range<usize>) -> Result<Self, LinalgError> {
        if range.start >= range.end || range.end > self.len() {
            return Err(LinalgError::IndexOutOfRange {
                row: range.start, column: range.end, nr_rows: self.len(), nr_columns: self.len(),
            });
        }

        let diagonal = self.diagonal.data[range.clone()].to_vec();
        let off_diagonal = self.off_diagonal.data[range.start..range.end - 1].to_vec();
        Self::new(
            DenseVector::new(diagonal, range.end - range.start),
            DenseVector::new(off_diagonal, range.end - range.start - 1),
        )
    }

    /// Not available: a selection of rows is generally not tridiagonal.
    pub fn select_rows(&self, _indices: &[usize]) -> Result<Self, LinalgError> {
        Err(LinalgError::UnsupportedOperation { operation: "select_rows", structure: STRUCTURE })
    }

    /// Not available: a selection of columns is generally not tridiagonal.
    pub fn select_columns(&self, _indices: &[usize]) -> Result<Self, LinalgError> {
        Err(LinalgError::UnsupportedOperation { operation: "select_columns", structure: STRUCTURE })
    }

    /// Block of rows and columns, only available for principal blocks, see `slice`.
    pub fn slice_block(&self, rows: Range<usize>, columns: Range<usize>) -> Result<Self, LinalgError> {
        if rows != columns {
            return Err(LinalgError::UnsupportedOperation { operation: "slice_block", structure: STRUCTURE });
        }

        self.slice(rows)
    }
}

impl<F: Scalar> Matrix<F> for SymmetricTridiagonal<F> {
    fn nr_rows(&self) -> usize {
        self.len()
    }

    fn nr_columns(&self) -> usize {
        self.len()
    }

    fn get(&self, row: usize, column: usize) -> Result<F, LinalgError> {
        check_index(self.shape(), row, column)?;

        Ok(match (row, column) {
            (i, j) if i == j => self.diagonal[i].clone(),
            (i, j) if i + 1 == j => self.off_diagonal[i].clone(),
            (i, j) if j + 1 == i => self.off_diagonal[j].clone(),
            _ => F::zero(),
        })
    }

    fn to_dense(&self) -> DenseMatrix<F> {
        let n = self.len();
        let mut matrix = DenseMatrix::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = self.diagonal[i].clone();
            if i < n - 1 {
                matrix[(i, i + 1)] = self.off_diagonal[i].clone();
                matrix[(i + 1, i)] = self.off_diagonal[i].clone();
            }
        }
        matrix
    }
}

impl<F: Scalar> Display for SymmetricTridiagonal<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.to_dense(), f)
    }
}
