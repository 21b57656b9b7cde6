//! # Sparse matrix
//!
//! A matrix stored as one `SparseVector` per row. Each row only holds its nonzero values, ordered
//! by column index. The shape is fixed at creation; slicing and concatenation create new
//! instances.
use std::fmt;
use std::fmt::Display;
use std::ops::Range;

use crate::data::linear_algebra::matrix::{check_index, DenseMatrix, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

/// Sparse matrix in row major format.
///
/// No row ever stores a zero value, so two instances are equal if and only if they represent the
/// same matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SparseMatrix<F> {
    rows: Vec<SparseVector<F>>,
    nr_columns: usize,
}

impl<F> SparseMatrix<F> {
    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &SparseVector<F>> {
        self.rows.iter()
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<SparseVector<F>>, nr_columns: usize) -> Self {
        Self { rows, nr_columns }
    }

    pub(crate) fn row_unchecked(&self, i: usize) -> &SparseVector<F> {
        &self.rows[i]
    }

    pub(crate) fn row_unchecked_mut(&mut self, i: usize) -> &mut SparseVector<F> {
        &mut self.rows[i]
    }

    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Shape check for operations with a second operand.
    pub(crate) fn require_shape(
        &self,
        operation: &'static str,
        shape: (usize, usize),
    ) -> Result<(), LinalgError> {
        let own = (self.rows.len(), self.nr_columns);
        if own == shape {
            Ok(())
        } else {
            Err(LinalgError::dimension_mismatch(operation, own, shape))
        }
    }
}

impl<F: Scalar> SparseMatrix<F> {
    /// Number of values stored.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|row| row.size()).sum()
    }

    /// Create a matrix of zeros.
    ///
    /// Nothing is stored.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            rows: (0..nr_rows).map(|_| SparseVector::empty(nr_columns)).collect(),
            nr_columns,
        }
    }

    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if a row doesn't have length `nr_columns`.
    pub fn from_rows(rows: Vec<SparseVector<F>>, nr_columns: usize) -> Result<Self, LinalgError> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != nr_columns) {
            return Err(LinalgError::dimension_mismatch("from rows", (i, row.len()), (i, nr_columns)));
        }

        Ok(Self { rows, nr_columns })
    }

    /// Create a matrix with all values equal to `value`.
    ///
    /// A zero value results in an empty matrix.
    pub fn filled(nr_rows: usize, nr_columns: usize, value: F) -> Self {
        let rows = (0..nr_rows)
            .map(|_| (0..nr_columns).map(|_| value.clone()).collect())
            .collect();

        Self { rows, nr_columns }
    }

    /// Identity-like matrix with ones on the main diagonal.
    ///
    /// # Arguments
    ///
    /// * `nr_rows`: Number of rows.
    /// * `nr_columns`: Number of columns, or `0` for a square matrix.
    pub fn eye(nr_rows: usize, nr_columns: usize) -> Self {
        let nr_columns = if nr_columns == 0 { nr_rows } else { nr_columns };

        let rows = (0..nr_rows)
            .map(|i| if i < nr_columns {
                SparseVector::standard_basis_vector(i, nr_columns)
            } else {
                SparseVector::empty(nr_columns)
            })
            .collect();

        Self { rows, nr_columns }
    }

    /// Square identity matrix.
    pub fn identity(len: usize) -> Self {
        Self::eye(len, len)
    }

    /// Create a matrix from (row, column, value) triplets.
    ///
    /// Later triplets for the same coordinate overwrite earlier ones, and zero values are not
    /// stored.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if a coordinate lies outside the matrix.
    pub fn from_triplets(
        nr_rows: usize,
        nr_columns: usize,
        triplets: impl IntoIterator<Item = (usize, usize, F)>,
    ) -> Result<Self, LinalgError> {
        let mut matrix = Self::new(nr_rows, nr_columns);
        for (i, j, value) in triplets {
            matrix.set(i, j, value)?;
        }

        Ok(matrix)
    }

    /// Create a matrix from a list of vectors.
    ///
    /// # Arguments
    ///
    /// * `vectors`: Rows of the matrix, or columns when `columnwise` is set.
    /// * `columnwise`: Whether the vectors are interpreted as columns.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the vectors are not all of the same length.
    pub fn from_vectors(vectors: &[DenseVector<F>], columnwise: bool) -> Result<Self, LinalgError> {
        let len = vectors.first().map_or(0, |vector| vector.len());
        if let Some((i, vector)) = vectors.iter().enumerate().find(|(_, v)| v.len() != len) {
            return Err(LinalgError::dimension_mismatch("from vectors", (i, vector.len()), (i, len)));
        }

        let rows = Self {
            rows: vectors.iter().map(SparseVector::from).collect(),
            nr_columns: len,
        };
        Ok(if columnwise { rows.transpose() } else { rows })
    }

    /// Dense representation of this matrix.
    pub fn to_dense(&self) -> DenseMatrix<F> {
        let data = self.rows.iter()
            .map(|row| row.to_dense().data)
            .collect();

        DenseMatrix::new(data, self.nr_columns)
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> Result<&SparseVector<F>, LinalgError> {
        self.rows.get(i).ok_or(LinalgError::IndexOutOfRange {
            row: i, column: 0, nr_rows: self.nr_rows(), nr_columns: self.nr_columns,
        })
    }

    /// Change the value at coordinate (`i`, `j`).
    ///
    /// Setting a zero value removes whatever is stored at that coordinate.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), LinalgError> {
        check_index(self.shape(), i, j)?;

        self.rows[i].set(j, value);
        Ok(())
    }

    /// Dense copy of row `i`.
    pub fn get_row(&self, i: usize) -> Result<DenseVector<F>, LinalgError> {
        self.row(i).map(SparseVector::to_dense)
    }

    /// Replace row `i` with the values of `row`.
    ///
    /// Zero values are not stored, so an all-zero vector leaves an empty row.
    pub fn set_row(&mut self, i: usize, row: &DenseVector<F>) -> Result<(), LinalgError> {
        self.row(i)?;
        if row.len() != self.nr_columns {
            return Err(LinalgError::dimension_mismatch("set row", (1, self.nr_columns), (1, row.len())));
        }

        self.rows[i] = SparseVector::from(row);
        Ok(())
    }

    /// Dense copy of column `j`.
    pub fn get_column(&self, j: usize) -> Result<DenseVector<F>, LinalgError> {
        if j >= self.nr_columns {
            return Err(LinalgError::IndexOutOfRange {
                row: 0, column: j, nr_rows: self.nr_rows(), nr_columns: self.nr_columns,
            });
        }

        Ok(self.rows.iter()
            .map(|row| row.get(j).cloned().unwrap_or_else(F::zero))
            .collect())
    }

    /// Replace column `j` with the values of `column`.
    pub fn set_column(&mut self, j: usize, column: &DenseVector<F>) -> Result<(), LinalgError> {
        if j >= self.nr_columns {
            return Err(LinalgError::IndexOutOfRange {
                row: 0, column: j, nr_rows: self.nr_rows(), nr_columns: self.nr_columns,
            });
        }
        if column.len() != self.nr_rows() {
            return Err(LinalgError::dimension_mismatch("set column", (self.nr_rows(), 1), (column.len(), 1)));
        }

        for (row, value) in self.rows.iter_mut().zip(column.iter()) {
            row.set(j, value.clone());
        }
        Ok(())
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut columns = vec![Vec::new(); self.nr_columns];
        for (i, row) in self.rows.iter().enumerate() {
            for (j, value) in row.iter() {
                columns[*j].push((i, value.clone()));
            }
        }

        let nr_rows = self.nr_rows();
        Self {
            rows: columns.into_iter().map(|data| SparseVector::new(data, nr_rows)).collect(),
            nr_columns: nr_rows,
        }
    }

    /// Matrix made of a selection of the rows of this matrix, in the order given.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self, LinalgError> {
        let rows = indices.iter()
            .map(|&i| self.row(i).cloned())
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, nr_columns: self.nr_columns })
    }

    /// Matrix made of a selection of the columns of this matrix, in the order given.
    pub fn select_columns(&self, indices: &[usize]) -> Result<Self, LinalgError> {
        if let Some(&j) = indices.iter().find(|&&j| j >= self.nr_columns) {
            return Err(LinalgError::IndexOutOfRange {
                row: 0, column: j, nr_rows: self.nr_rows(), nr_columns: self.nr_columns,
            });
        }

        let rows = self.rows.iter()
            .map(|row| {
                let data = indices.iter().enumerate()
                    .filter_map(|(new_j, &j)| row.get(j).map(|value| (new_j, value.clone())))
                    .collect();
                SparseVector::new(data, indices.len())
            })
            .collect();

        Ok(Self { rows, nr_columns: indices.len() })
    }

    /// Contiguous block of this matrix.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if a range ends beyond the matrix or is reversed.
    pub fn slice(&self, rows: Range<usize>, columns: Range<usize>) -> Result<Self, LinalgError> {
        if rows.start > rows.end || rows.end > self.nr_rows()
            || columns.start > columns.end || columns.end > self.nr_columns {
            return Err(LinalgError::IndexOutOfRange {
                row: rows.end, column: columns.end,
                nr_rows: self.nr_rows(), nr_columns: self.nr_columns,
            });
        }

        Ok(Self {
            rows: self.rows[rows].iter().map(|row| row.slice(columns.clone())).collect(),
            nr_columns: columns.end - columns.start,
        })
    }

    /// Place `other` to the right of this matrix.
    pub fn hcat(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.nr_rows() != other.nr_rows() {
            return Err(LinalgError::dimension_mismatch("horizontal concatenation", self.shape(), other.shape()));
        }

        let mut result = self.clone();
        for (row, other_row) in result.rows.iter_mut().zip(&other.rows) {
            row.concatenate(other_row);
        }
        result.nr_columns += other.nr_columns;

        Ok(result)
    }

    /// Place `other` below this matrix.
    pub fn vcat(&self, other: &Self) -> Result<Self, LinalgError> {
        if self.nr_columns != other.nr_columns {
            return Err(LinalgError::dimension_mismatch("vertical concatenation", self.shape(), other.shape()));
        }

        let mut result = self.clone();
        result.rows.extend(other.rows.iter().cloned());

        Ok(result)
    }

    /// Copy of this matrix with an extra row at the bottom.
    pub fn with_row(&self, row: &DenseVector<F>) -> Result<Self, LinalgError> {
        if row.len() != self.nr_columns {
            return Err(LinalgError::dimension_mismatch("append row", self.shape(), (1, row.len())));
        }

        let mut result = self.clone();
        result.rows.push(SparseVector::from(row));

        Ok(result)
    }

    /// Copy of this matrix with an extra column at the right.
    pub fn with_column(&self, column: &DenseVector<F>) -> Result<Self, LinalgError> {
        if column.len() != self.nr_rows() {
            return Err(LinalgError::dimension_mismatch("append column", self.shape(), (column.len(), 1)));
        }

        let mut result = self.clone();
        let j = result.nr_columns;
        result.nr_columns += 1;
        for (row, value) in result.rows.iter_mut().zip(column.iter()) {
            row.extend(1);
            row.set(j, value.clone());
        }

        Ok(result)
    }

    /// Copy of this matrix without row `i` and column `j`.
    pub(crate) fn minor(&self, i: usize, j: usize) -> Self {
        debug_assert!(i < self.nr_rows() && j < self.nr_columns);

        let rows = self.rows.iter().enumerate()
            .filter(|&(k, _)| k != i)
            .map(|(_, row)| {
                let mut row = row.clone();
                row.remove_indices(&[j]);
                row
            })
            .collect();

        Self { rows, nr_columns: self.nr_columns - 1 }
    }

    /// Values on the main diagonal, `min(nr_rows, nr_columns)` of them.
    pub fn diagonal(&self) -> DenseVector<F> {
        (0..self.nr_rows().min(self.nr_columns))
            .map(|i| self.rows[i].get(i).cloned().unwrap_or_else(F::zero))
            .collect()
    }

    /// Sum of the values on the main diagonal.
    pub fn trace(&self) -> F {
        self.diagonal().iter().fold(F::zero(), |total, value| total + value)
    }

    /// Sum of all values.
    pub fn sum(&self) -> F {
        self.rows.iter().fold(F::zero(), |total, row| total + row.sum())
    }

    /// Copy with only the values on or above the main diagonal.
    #[must_use]
    pub fn upper_triangle(&self) -> Self {
        self.filter_values(|i, j| j >= i)
    }

    /// Copy with only the values on or below the main diagonal.
    #[must_use]
    pub fn lower_triangle(&self) -> Self {
        self.filter_values(|i, j| j <= i)
    }

    fn filter_values(&self, keep: impl Fn(usize, usize) -> bool) -> Self {
        let rows = self.rows.iter().enumerate()
            .map(|(i, row)| {
                let data = row.iter()
                    .filter(|&&(j, _)| keep(i, j))
                    .cloned()
                    .collect();
                SparseVector::new(data, self.nr_columns)
            })
            .collect();

        Self { rows, nr_columns: self.nr_columns }
    }

    /// Whether this matrix is square and equal to its transpose.
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }

    /// Whether all values below the main diagonal are zero.
    pub fn is_upper_triangular(&self) -> bool {
        self.rows.iter().enumerate()
            .all(|(i, row)| row.iter().all(|&(j, _)| j >= i))
    }

    /// Whether all values above the main diagonal are zero.
    pub fn is_lower_triangular(&self) -> bool {
        self.rows.iter().enumerate()
            .all(|(i, row)| row.iter().all(|&(j, _)| j <= i))
    }
}

impl<F: Scalar> Matrix<F> for SparseMatrix<F> {
    fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, row: usize, column: usize) -> Result<F, LinalgError> {
        check_index(self.shape(), row, column)?;

        Ok(self.rows[row].get(column).cloned().unwrap_or_else(F::zero))
    }

    fn to_dense(&self) -> DenseMatrix<F> {
        SparseMatrix::to_dense(self)
    }
}

impl<F: Scalar> From<&DenseMatrix<F>> for SparseMatrix<F> {
    fn from(matrix: &DenseMatrix<F>) -> Self {
        let rows = (0..matrix.nr_rows())
            .map(|i| matrix.row(i).iter().cloned().collect())
            .collect();

        Self { rows, nr_columns: matrix.nr_columns() }
    }
}

impl<F: Scalar> Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.to_dense(), f)
    }
}
