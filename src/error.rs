//! # Errors of the linear algebra operations
//!
//! All failures are unrecoverable at the point of detection and are returned to the caller. The
//! only recovery is for the caller to choose another algorithm, for example falling back from
//! `lu_no_pivoting` to `inverse` after a `SingularPivot`.
use thiserror::Error;

use crate::io::error::ImportError;

/// Shape of an operand, as (rows, columns). A vector of length `n` has shape (`n`, 1).
pub type Shape = (usize, usize);

/// An error raised by a matrix or vector operation.
#[derive(Debug, Error)]
pub enum LinalgError {
    /// The shapes of the operands are incompatible.
    ///
    /// Detected before any computation is done.
    #[error("dimension mismatch in {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Shape of the receiver.
        left: Shape,
        /// Shape of the other operand, or the shape that was required.
        right: Shape,
    },
    /// An index lies outside of the matrix or vector.
    #[error("index ({row}, {column}) out of range for a {nr_rows}x{nr_columns} matrix")]
    IndexOutOfRange {
        /// Row index that was requested.
        row: usize,
        /// Column index that was requested.
        column: usize,
        /// Number of rows of the matrix.
        nr_rows: usize,
        /// Number of columns of the matrix.
        nr_columns: usize,
    },
    /// An algorithm without pivoting met an exact zero pivot.
    ///
    /// The matrix might still be nonsingular; a pivoting method can be tried instead.
    #[error("exact zero pivot at index {index}")]
    SingularPivot {
        /// Row (and column) of the zero pivot.
        index: usize,
    },
    /// No nonzero pivot candidate exists: the matrix has no inverse, or the reduction can't
    /// proceed.
    #[error("singular matrix: no nonzero pivot in column {column}")]
    SingularMatrix {
        /// Column in which no pivot could be found.
        column: usize,
    },
    /// The operation is not applicable to the storage structure of the receiver.
    #[error("{operation} is not applicable to a {structure}")]
    UnsupportedOperation {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Name of the structure it was attempted on.
        structure: &'static str,
    },
    /// Reading a matrix from text or a file failed.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] ImportError),
}

impl LinalgError {
    pub(crate) fn dimension_mismatch(operation: &'static str, left: Shape, right: Shape) -> Self {
        LinalgError::DimensionMismatch { operation, left, right }
    }
}
