//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>`, fixed size. This is the row storage of the sparse matrix: only
//! nonzero values are stored, ordered by increasing index.
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::iter::FromIterator;
use std::mem;
use std::ops::Range;
use std::slice::Iter;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::number_types::traits::{NonZero, Scalar};

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
///
/// No zero values are ever stored, so two vectors are equal if and only if they represent the
/// same vector.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
    len: usize,
}

impl<F> Sparse<F> {
    /// Create a vector of length `len` without any nonzero values.
    pub fn empty(len: usize) -> Self {
        Self { data: Vec::new(), len }
    }

    fn get_data_index(&self, i: usize) -> Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    /// Remove the value at index `i`, if there is one.
    pub fn set_zero(&mut self, i: usize) {
        if let Ok(index) = self.get_data_index(i) {
            self.data.remove(index);
        }
    }

    /// Increase the length of the vector by padding with zeros.
    pub fn extend(&mut self, extra_len: usize) {
        self.len += extra_len;
    }

    /// Remove elements and shift the remaining indices down.
    ///
    /// # Arguments
    ///
    /// * `indices`: Indices to remove, assumed sorted and unique.
    pub fn remove_indices(&mut self, indices: &[usize]) {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.windows(2).all(|w| w[0] != w[1]));
        debug_assert!(indices.iter().all(|&i| i < self.len));

        if indices.is_empty() {
            return;
        }

        let old_data = mem::take(&mut self.data);
        let mut nr_skipped = 0;
        for (i, value) in old_data {
            while nr_skipped < indices.len() && indices[nr_skipped] < i {
                nr_skipped += 1;
            }
            if nr_skipped < indices.len() && indices[nr_skipped] == i {
                continue;
            }
            self.data.push((i - nr_skipped, value));
        }
        self.len -= indices.len();
    }
}

impl<F: Clone> Sparse<F> {
    /// The part of this vector with indices in `range`, reindexed to start at zero.
    pub fn slice(&self, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= self.len);

        let start = self.data.partition_point(|&(i, _)| i < range.start);
        let end = self.data.partition_point(|&(i, _)| i < range.end);

        Self {
            data: self.data[start..end].iter()
                .map(|(i, value)| (i - range.start, value.clone()))
                .collect(),
            len: range.end - range.start,
        }
    }

    /// Append the values of another vector behind the values of this one.
    pub fn concatenate(&mut self, other: &Self) {
        let offset = self.len;
        self.data.extend(other.data.iter().map(|(i, value)| (offset + i, value.clone())));
        self.len += other.len;
    }
}

impl<F: Scalar> Vector<F> for Sparse<F> {
    type Inner = SparseTuple<F>;

    /// Create a vector of length `len` from `data`.
    ///
    /// Requires that zero values are already filtered and that the data is sorted by index.
    fn new(data: Vec<Self::Inner>, len: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < len));
        debug_assert!(data.is_sorted_by_key(|&(i, _)| i));
        debug_assert!(data.windows(2).all(|w| w[0].0 != w[1].0));
        debug_assert!(data.iter().all(|(_, v)| v.is_not_zero()));

        Self { data, len }
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Arguments
    ///
    /// * `i`: Index of the value. New tuple will be inserted, potentially causing many values to
    /// be shifted.
    /// * `value`: Value to be taken at index `i`. When it is zero, any value at that index is
    /// removed instead.
    fn set(&mut self, i: usize, value: F) {
        assert!(i < self.len, "index {} out of range for length {}", i, self.len);

        if value.is_zero() {
            self.set_zero(i);
        } else {
            match self.get_data_index(i) {
                Ok(index) => self.data[index].1 = value,
                Err(index) => self.data.insert(index, (i, value)),
            }
        }
    }

    fn get(&self, index: usize) -> Option<&F> {
        assert!(index < self.len, "index {} out of range for length {}", index, self.len);

        self.get_data_index(index).ok().map(|i| &self.data[i].1)
    }

    fn iter(&self) -> Iter<'_, Self::Inner> {
        self.data.iter()
    }

    /// The length of this vector.
    fn len(&self) -> usize {
        self.len
    }

    /// Whether this vector has zero size.
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nonzero values stored.
    fn size(&self) -> usize {
        self.data.len()
    }
}

impl<F: Scalar> FromIterator<F> for Sparse<F> {
    fn from_iter<I: IntoIterator<Item=F>>(iter: I) -> Self {
        let mut data = Vec::new();
        let mut counter = 0;

        for item in iter.into_iter() {
            if item.is_not_zero() {
                data.push((counter, item));
            }
            counter += 1;
        }

        Self::new(data, counter)
    }
}

impl<F: Scalar> From<&DenseVector<F>> for Sparse<F> {
    fn from(vector: &DenseVector<F>) -> Self {
        vector.iter().cloned().collect()
    }
}

impl<F: Scalar> Sparse<F> {
    /// Create a `SparseVector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at zero, and runs
    /// until (not through) `len`.
    /// * `len`: Size of the `SparseVector`.
    #[must_use]
    pub fn standard_basis_vector(i: usize, len: usize) -> Self {
        debug_assert!(i < len);

        Self::new(vec![(i, F::one())], len)
    }

    /// Dense representation of this vector.
    pub fn to_dense(&self) -> DenseVector<F> {
        let mut data = vec![F::zero(); self.len];
        for (i, value) in &self.data {
            data[*i] = value.clone();
        }

        DenseVector::new(data, self.len)
    }

    /// Calculate the inner product between two sparse vectors.
    ///
    /// Both index lists are walked in increasing order with a cursor each; the cursor with the
    /// smaller index advances, and matching indices contribute a product. This is linear in the
    /// number of stored values of both vectors.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> F {
        debug_assert_eq!(self.len, other.len);

        let mut total = F::zero();

        let (mut i, mut j) = (0, 0);
        while i < self.data.len() && j < other.data.len() {
            let (left_index, left_value) = &self.data[i];
            let (right_index, right_value) = &other.data[j];

            match left_index.cmp(right_index) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    total += left_value.clone() * right_value;
                    i += 1;
                    j += 1;
                },
            }
        }

        total
    }

    /// Calculate the inner product with a dense vector.
    ///
    /// Only the nonzero values of this vector are visited.
    #[must_use]
    pub fn inner_product_with_dense(&self, other: &DenseVector<F>) -> F {
        debug_assert_eq!(other.len(), self.len());

        let mut total = F::zero();
        for (i, value) in &self.data {
            total += value.clone() * &other[*i];
        }

        total
    }

    /// Add the multiple of another row to this row.
    ///
    /// # Arguments
    ///
    /// * `multiple`: Constant that all elements of the `other` vector are multiplied with.
    /// * `other`: Vector to add a multiple of to this vector.
    ///
    /// Values that cancel to zero are removed.
    pub fn add_multiple_of_row(&mut self, multiple: &F, other: &Self) {
        debug_assert_eq!(other.len(), self.len());

        if multiple.is_zero() {
            return;
        }

        self.merge(
            other,
            |value| value.clone() * multiple,
            |old, value| old + value.clone() * multiple,
        );
    }

    /// Add another vector to this one.
    pub fn add_assign_vector(&mut self, other: &Self) {
        debug_assert_eq!(other.len(), self.len());

        self.merge(other, F::clone, |old, value| old + value);
    }

    /// Subtract another vector from this one.
    pub fn sub_assign_vector(&mut self, other: &Self) {
        debug_assert_eq!(other.len(), self.len());

        self.merge(other, |value| -value.clone(), |old, value| old - value);
    }

    /// Walk both vectors in increasing index order and combine them into this one.
    ///
    /// # Arguments
    ///
    /// * `only_other`: Value for an index where only `other` has a value.
    /// * `both`: Value for an index where both vectors have a value.
    ///
    /// Indices where only this vector has a value are kept as they are.
    fn merge(
        &mut self,
        other: &Self,
        only_other: impl Fn(&F) -> F,
        both: impl Fn(F, &F) -> F,
    ) {
        let old_data = mem::replace(&mut self.data, Vec::with_capacity(0));
        let mut new_tuples = Vec::with_capacity(old_data.len() + other.data.len());

        let mut j = 0;  // data index
        for (i, value) in old_data {
            while j < other.data.len() && other.data[j].0 < i {
                let new_value = only_other(&other.data[j].1);
                if new_value.is_not_zero() {
                    new_tuples.push((other.data[j].0, new_value));
                }
                j += 1;
            }

            if j < other.data.len() && i == other.data[j].0 {
                let new_value = both(value, &other.data[j].1);
                if new_value.is_not_zero() {
                    new_tuples.push((i, new_value));
                }
                j += 1;
            } else {
                new_tuples.push((i, value));
            }
        }
        for (j, value) in &other.data[j..] {
            let new_value = only_other(value);
            if new_value.is_not_zero() {
                new_tuples.push((*j, new_value));
            }
        }

        self.data = new_tuples;
    }

    /// Multiply each element of the vector by a value.
    ///
    /// Multiplying by zero empties the vector.
    pub fn element_wise_multiply(&mut self, value: &F) {
        if value.is_zero() {
            self.data.clear();
        } else {
            for (_, v) in &mut self.data {
                *v *= value;
            }
            // Products of nonzero floats can underflow
            self.data.retain(|(_, v)| v.is_not_zero());
        }
    }

    /// Divide each element of the vector by a nonzero value.
    pub fn element_wise_divide(&mut self, value: &F) {
        debug_assert!(value.is_not_zero());

        for (_, v) in &mut self.data {
            *v /= value;
        }
        self.data.retain(|(_, v)| v.is_not_zero());
    }

    /// Negate each element of the vector.
    pub fn negate(&mut self) {
        for (_, v) in &mut self.data {
            *v = -mem::replace(v, F::zero());
        }
    }

    /// Sum of the nonzero values.
    pub fn sum(&self) -> F {
        self.data.iter().fold(F::zero(), |total, (_, value)| total + value)
    }
}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (data_index, (index, value)) in self.data.iter().enumerate() {
            write!(f, "({} {})", index, value)?;
            if data_index < self.data.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
