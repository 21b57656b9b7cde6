//! # Arithmetic on sparse matrices
//!
//! The type of the result reflects how much of it can be nonzero: combining two sparse matrices
//! gives a sparse matrix, while adding a scalar, a vector or a dense matrix fills in every value
//! and gives a `DenseMatrix`. Operations that check dimensions return a `Result`.
use std::ops::{Add, DivAssign, Mul, MulAssign, Neg, Sub};

use crate::data::linear_algebra::matrix::{DenseMatrix, Matrix, SparseMatrix};
use crate::data::linear_algebra::vector::{DenseVector, SparseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

cfg_if::cfg_if! { if #[cfg(feature = "parallel")] {
    use rayon::prelude::*;
}}

impl<F: Scalar> SparseMatrix<F> {
    /// Add another sparse matrix to this one, in place.
    ///
    /// Values that cancel are removed.
    pub fn add_assign_matrix(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.require_shape("addition", other.shape())?;

        for (i, row) in other.rows().enumerate() {
            self.row_unchecked_mut(i).add_assign_vector(row);
        }
        Ok(())
    }

    /// Subtract another sparse matrix from this one, in place.
    pub fn sub_assign_matrix(&mut self, other: &Self) -> Result<(), LinalgError> {
        self.require_shape("subtraction", other.shape())?;

        for (i, row) in other.rows().enumerate() {
            self.row_unchecked_mut(i).sub_assign_vector(row);
        }
        Ok(())
    }

    /// Multiply every value with a scalar.
    ///
    /// Multiplying by zero gives an empty matrix.
    #[must_use]
    pub fn scale(&self, factor: &F) -> Self {
        let mut result = self.clone();
        result *= factor;
        result
    }

    /// Dense matrix of this matrix with `value` added to every element.
    pub fn add_scalar(&self, value: &F) -> DenseMatrix<F> {
        self.map_dense(|old| old + value)
    }

    /// Dense matrix of this matrix with `value` subtracted from every element.
    pub fn sub_scalar(&self, value: &F) -> DenseMatrix<F> {
        self.map_dense(|old| old - value)
    }

    fn map_dense(&self, f: impl Fn(F) -> F) -> DenseMatrix<F> {
        let data = self.rows()
            .map(|row| row.to_dense().data.into_iter().map(&f).collect())
            .collect();

        DenseMatrix::new(data, self.nr_columns())
    }

    /// Dense matrix with `vector` combined into every row.
    fn combine_rows(
        &self,
        vector: &DenseVector<F>,
        operation: &'static str,
        f: impl Fn(F, &F) -> F,
    ) -> Result<DenseMatrix<F>, LinalgError> {
        if vector.len() != self.nr_columns() {
            return Err(LinalgError::dimension_mismatch(operation, self.shape(), (1, vector.len())));
        }

        let data = self.rows()
            .map(|row| row.to_dense().data.into_iter()
                .zip(vector.iter())
                .map(|(old, value)| f(old, value))
                .collect())
            .collect();

        Ok(DenseMatrix::new(data, self.nr_columns()))
    }

    /// Product of this matrix with the transpose of another matrix.
    ///
    /// Each value of the result is the inner product of two sorted rows, computed by walking both
    /// rows at once.
    fn multiply_transposed(&self, transposed: &Self) -> Self {
        let product_row = |row: &SparseVector<F>| -> SparseVector<F> {
            let data = transposed.rows().enumerate()
                .filter_map(|(j, column)| {
                    let value = row.inner_product(column);
                    if value.is_zero() { None } else { Some((j, value)) }
                })
                .collect();

            SparseVector::new(data, transposed.nr_rows())
        };

        let rows;
        cfg_if::cfg_if! {
            if #[cfg(feature = "parallel")] {
                rows = self.rows().collect::<Vec<_>>().into_par_iter().map(product_row).collect();
            } else {
                rows = self.rows().map(product_row).collect();
            }
        }

        Self::from_rows_unchecked(rows, transposed.nr_rows())
    }
}

impl<F: Scalar> Add<&SparseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<SparseMatrix<F>, LinalgError>;

    fn add(self, rhs: &SparseMatrix<F>) -> Self::Output {
        let mut result = self.clone();
        result.add_assign_matrix(rhs)?;
        Ok(result)
    }
}

impl<F: Scalar> Sub<&SparseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<SparseMatrix<F>, LinalgError>;

    fn sub(self, rhs: &SparseMatrix<F>) -> Self::Output {
        let mut result = self.clone();
        result.sub_assign_matrix(rhs)?;
        Ok(result)
    }
}

impl<F: Scalar> Add<&DenseVector<F>> for &SparseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    /// Add the vector to every row.
    fn add(self, rhs: &DenseVector<F>) -> Self::Output {
        self.combine_rows(rhs, "row-wise addition", |old, value| old + value)
    }
}

impl<F: Scalar> Sub<&DenseVector<F>> for &SparseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    /// Subtract the vector from every row.
    fn sub(self, rhs: &DenseVector<F>) -> Self::Output {
        self.combine_rows(rhs, "row-wise subtraction", |old, value| old - value)
    }
}

impl<F: Scalar> Add<&DenseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    fn add(self, rhs: &DenseMatrix<F>) -> Self::Output {
        self.require_shape("addition", rhs.shape())?;

        let mut result = rhs.clone();
        for (i, row) in self.rows().enumerate() {
            for (j, value) in row.iter() {
                result[(i, *j)] += value;
            }
        }
        Ok(result)
    }
}

impl<F: Scalar> Sub<&DenseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    fn sub(self, rhs: &DenseMatrix<F>) -> Self::Output {
        self.require_shape("subtraction", rhs.shape())?;

        &self.to_dense() - rhs
    }
}

impl<F: Scalar> Neg for &SparseMatrix<F> {
    type Output = SparseMatrix<F>;

    fn neg(self) -> Self::Output {
        let mut result = self.clone();
        for i in 0..result.nr_rows() {
            result.row_unchecked_mut(i).negate();
        }
        result
    }
}

impl<F: Scalar> Mul<&SparseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<SparseMatrix<F>, LinalgError>;

    /// Multiply two sparse matrices.
    ///
    /// The right operand is transposed first, such that both operands are accessed by rows.
    fn mul(self, rhs: &SparseMatrix<F>) -> Self::Output {
        if self.nr_columns() != rhs.nr_rows() {
            return Err(LinalgError::dimension_mismatch("multiplication", self.shape(), rhs.shape()));
        }

        Ok(self.multiply_transposed(&rhs.transpose()))
    }
}

impl<F: Scalar> Mul<&DenseMatrix<F>> for &SparseMatrix<F> {
    type Output = Result<DenseMatrix<F>, LinalgError>;

    /// Only the values stored in the rows of this matrix are visited.
    fn mul(self, rhs: &DenseMatrix<F>) -> Self::Output {
        if self.nr_columns() != rhs.nr_rows() {
            return Err(LinalgError::dimension_mismatch("multiplication", self.shape(), rhs.shape()));
        }

        let columns = (0..rhs.nr_columns()).map(|j| rhs.column(j)).collect::<Vec<_>>();
        let product_row = |row: &SparseVector<F>| -> Vec<F> {
            columns.iter().map(|column| row.inner_product_with_dense(column)).collect()
        };

        let data;
        cfg_if::cfg_if! {
            if #[cfg(feature = "parallel")] {
                data = self.rows().collect::<Vec<_>>().into_par_iter().map(product_row).collect();
            } else {
                data = self.rows().map(product_row).collect();
            }
        }

        Ok(DenseMatrix::new(data, rhs.nr_columns()))
    }
}

impl<F: Scalar> Mul<&DenseVector<F>> for &SparseMatrix<F> {
    type Output = Result<DenseVector<F>, LinalgError>;

    fn mul(self, rhs: &DenseVector<F>) -> Self::Output {
        if self.nr_columns() != rhs.len() {
            return Err(LinalgError::dimension_mismatch("multiplication", self.shape(), (rhs.len(), 1)));
        }

        Ok(self.rows().map(|row| row.inner_product_with_dense(rhs)).collect())
    }
}

impl<F: Scalar> MulAssign<&F> for SparseMatrix<F> {
    fn mul_assign(&mut self, rhs: &F) {
        for i in 0..self.nr_rows() {
            self.row_unchecked_mut(i).element_wise_multiply(rhs);
        }
    }
}

impl<F: Scalar> DivAssign<&F> for SparseMatrix<F> {
    /// Divide every value by a nonzero scalar.
    fn div_assign(&mut self, rhs: &F) {
        debug_assert!(!rhs.is_zero());

        for i in 0..self.nr_rows() {
            self.row_unchecked_mut(i).element_wise_divide(rhs);
        }
    }
}
