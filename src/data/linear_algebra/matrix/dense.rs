//! # Dense matrix
//!
//! Row major storage in a `Vec<Vec<_>>`. Used as the result type of operations that fill in
//! (nearly) every value, and as the reference in tests of the sparse algorithms.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::{check_index, Matrix};
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the rows don't all have the same length.
    pub fn from_data(data: Vec<Vec<F>>) -> Result<Self, LinalgError> {
        let nr_columns = data.first().map_or(0, Vec::len);
        if let Some((i, row)) = data.iter().find_position(|row| row.len() != nr_columns) {
            return Err(LinalgError::dimension_mismatch(
                "dense matrix construction", (i, row.len()), (0, nr_columns),
            ));
        }

        Ok(Self { data, nr_columns })
    }

    /// Create a matrix from rows that are known to be of length `nr_columns`.
    pub(crate) fn new(data: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_columns }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        &self.data[i]
    }
}

impl<F: Clone> DenseMatrix<F> {
    /// A matrix with every value equal to `value`.
    pub fn constant(value: F, nr_rows: usize, nr_columns: usize) -> Self {
        Self { data: vec![vec![value; nr_columns]; nr_rows], nr_columns }
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> DenseVector<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j].clone()).collect()
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns)
            .map(|j| self.data.iter().map(|row| row[j].clone()).collect())
            .collect();

        Self { data, nr_columns: self.data.len() }
    }
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a dense matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self::constant(F::zero(), nr_rows, nr_columns)
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.data[i][i] = F::one();
        }

        matrix
    }

    /// Change the value at coordinate (`i`, `j`).
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<(), LinalgError> {
        check_index(self.shape(), i, j)?;

        self.data[i][j] = value;
        Ok(())
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(F, &F) -> F,
    ) -> Result<Self, LinalgError> {
        if self.shape() != other.shape() {
            return Err(LinalgError::dimension_mismatch(operation, self.shape(), other.shape()));
        }

        let data = self.data.iter().zip(&other.data)
            .map(|(left, right)| left.iter().zip(right)
                .map(|(l, r)| f(l.clone(), r))
                .collect())
            .collect();

        Ok(Self::new(data, self.nr_columns))
    }
}

impl<F: Scalar> Matrix<F> for DenseMatrix<F> {
    fn nr_rows(&self) -> usize {
        self.data.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, row: usize, column: usize) -> Result<F, LinalgError> {
        check_index(self.shape(), row, column)?;

        Ok(self.data[row][column].clone())
    }

    fn to_dense(&self) -> DenseMatrix<F> {
        self.clone()
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

impl<F: Scalar> Add<&DenseMatrix<F>> for &DenseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    fn add(self, rhs: &DenseMatrix<F>) -> Self::Output {
        self.zip_with(rhs, "dense matrix addition", |left, right| left + right)
    }
}

impl<F: Scalar> Sub<&DenseMatrix<F>> for &DenseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    fn sub(self, rhs: &DenseMatrix<F>) -> Self::Output {
        self.zip_with(rhs, "dense matrix subtraction", |left, right| left - right)
    }
}

impl<F: Scalar> Mul<&DenseMatrix<F>> for &DenseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    fn mul(self, rhs: &DenseMatrix<F>) -> Self::Output {
        if self.nr_columns() != rhs.nr_rows() {
            return Err(LinalgError::dimension_mismatch("dense multiplication", self.shape(), rhs.shape()));
        }

        let data = self.data.iter()
            .map(|row| (0..rhs.nr_columns())
                .map(|j| row.iter().enumerate()
                    .fold(F::zero(), |total, (k, value)| total + value.clone() * &rhs.data[k][j]))
                .collect())
            .collect();

        Ok(DenseMatrix::new(data, rhs.nr_columns()))
    }
}

impl<F: Scalar> Mul<&DenseVector<F>> for &DenseMatrix<F> {
    type Output = Result<DenseVector<F>, LinalgError>;

    fn mul(self, rhs: &DenseVector<F>) -> Self::Output {
        if self.nr_columns() != rhs.len() {
            return Err(LinalgError::dimension_mismatch("dense multiplication", self.shape(), (rhs.len(), 1)));
        }

        Ok(self.data.iter()
            .map(|row| row.iter().zip(rhs.iter())
                .fold(F::zero(), |total, (left, right)| total + left.clone() * right))
            .collect())
    }
}

impl<F: Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}
