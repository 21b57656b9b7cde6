//! # Matrix implementations
//!
//! The `Matrix` trait defines a set of operations available for all matrix types defined in this
//! module: the general `SparseMatrix`, its `DenseMatrix` companion and the compact
//! `SymmetricTridiagonal`.
use std::fmt::{Debug, Display};

pub use dense::DenseMatrix;
pub use sparse::SparseMatrix;
pub use tridiagonal::SymmetricTridiagonal;

use crate::error::{LinalgError, Shape};

mod dense;
mod ops;
mod sparse;
mod tridiagonal;

/// Defines basic ways to read a matrix, regardless of back-end.
pub trait Matrix<F>: Display + Debug {
    /// Number of rows.
    fn nr_rows(&self) -> usize;
    /// Number of columns.
    fn nr_columns(&self) -> usize;
    /// Value at coordinate (`row`, `column`).
    ///
    /// # Return value
    ///
    /// The value, which is zero when nothing is stored at that coordinate, or an
    /// `IndexOutOfRange` error.
    fn get(&self, row: usize, column: usize) -> Result<F, LinalgError>;
    /// Dense copy of this matrix.
    fn to_dense(&self) -> DenseMatrix<F>;

    /// Shape as (rows, columns).
    fn shape(&self) -> Shape {
        (self.nr_rows(), self.nr_columns())
    }
    /// Whether the number of rows equals the number of columns.
    fn is_square(&self) -> bool {
        self.nr_rows() == self.nr_columns()
    }
}

/// Check that (`row`, `column`) lies inside a matrix of the given shape.
pub(crate) fn check_index(shape: Shape, row: usize, column: usize) -> Result<(), LinalgError> {
    let (nr_rows, nr_columns) = shape;
    if row < nr_rows && column < nr_columns {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { row, column, nr_rows, nr_columns })
    }
}

/// Fail with a `DimensionMismatch` unless the matrix is square.
pub(crate) fn require_square(operation: &'static str, shape: Shape) -> Result<usize, LinalgError> {
    let (nr_rows, nr_columns) = shape;
    if nr_rows == nr_columns {
        Ok(nr_rows)
    } else {
        Err(LinalgError::dimension_mismatch(operation, shape, (nr_rows, nr_rows)))
    }
}
