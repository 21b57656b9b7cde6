//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size and can interact with sparse vectors.
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use std::slice::Iter;

use crate::data::linear_algebra::vector::{SparseVector, Vector};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    #[allow(missing_docs)]
    pub data: Vec<F>,
}

impl<F> Dense<F> {
    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    ///
    /// # Return value
    ///
    /// A constant `DenseVector`.
    pub fn constant(value: F, len: usize) -> Self
        where
            F: Clone,
    {
        Self { data: vec![value; len], }
    }

    /// Append a value to this vector.
    pub fn push_value(&mut self, value: F) {
        self.data.push(value);
    }
}

impl<F: Scalar> Dense<F> {
    /// A vector of zeros.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Whether all values are zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Inner product with another dense vector.
    pub fn inner_product(&self, other: &Self) -> Result<F, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::dimension_mismatch(
                "inner product", (self.len(), 1), (other.len(), 1),
            ));
        }

        Ok(self.data.iter().zip(&other.data)
            .fold(F::zero(), |total, (left, right)| total + left.clone() * right))
    }

    /// Sparse representation of this vector.
    pub fn to_sparse(&self) -> SparseVector<F> {
        SparseVector::from(self)
    }

    fn zip_with(
        &self,
        other: &Self,
        operation: &'static str,
        f: impl Fn(F, &F) -> F,
    ) -> Result<Self, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::dimension_mismatch(operation, (self.len(), 1), (other.len(), 1)));
        }

        Ok(Self {
            data: self.data.iter().zip(&other.data)
                .map(|(left, right)| f(left.clone(), right))
                .collect(),
        })
    }
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<F: Scalar> Vector<F> for Dense<F> {
    type Inner = F;

    /// Create a `DenseVector` from the provided data.
    fn new(data: Vec<Self::Inner>, len: usize) -> Self {
        debug_assert_eq!(data.len(), len);

        Self { data, }
    }

    /// Set the value at index `i` to `value`.
    fn set(&mut self, i: usize, value: F) {
        self.data[i] = value;
    }

    fn get(&self, i: usize) -> Option<&F> {
        Some(&self.data[i])
    }

    /// Iterate over the values of this vector.
    fn iter(&self) -> Iter<'_, Self::Inner> {
        self.data.iter()
    }

    /// The length of this vector.
    fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The size of this vector in memory.
    fn size(&self) -> usize {
        self.data.len()
    }
}

impl<F> FromIterator<F> for Dense<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<F: Scalar> Add<&Dense<F>> for &Dense<F> {
    type Output = Result<Dense<F>, LinalgError>;

    fn add(self, rhs: &Dense<F>) -> Self::Output {
        self.zip_with(rhs, "vector addition", |left, right| left + right)
    }
}

impl<F: Scalar> Sub<&Dense<F>> for &Dense<F> {
    type Output = Result<Dense<F>, LinalgError>;

    fn sub(self, rhs: &Dense<F>) -> Self::Output {
        self.zip_with(rhs, "vector subtraction", |left, right| left - right)
    }
}

impl<F: Scalar> Mul<&F> for &Dense<F> {
    type Output = Dense<F>;

    fn mul(self, rhs: &F) -> Self::Output {
        self.data.iter().map(|value| value.clone() * rhs).collect()
    }
}

impl<F: Scalar> Neg for Dense<F> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.data.into_iter().map(|value| -value).collect()
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}
