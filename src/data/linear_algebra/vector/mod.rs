//! # Vector types
//!
//! Sparse and dense vectors. These were written by hand, because a certain specific set of
//! operations needs to be done quickly with these types: the sparse vector is the row storage of
//! the sparse matrix.
use std::fmt::{Debug, Display};
use std::slice::Iter;

pub use dense::Dense as DenseVector;
pub use sparse::Sparse as SparseVector;

mod dense;
mod sparse;

/// Defines basic ways to create or change a vector, regardless of back-end.
pub trait Vector<F>: PartialEq + Display + Debug {
    /// Items stored internally.
    type Inner;

    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Will not be changed and directly used for creation.
    /// * `len`: Length of the vector represented (and not necessarily of the internal data
    /// structure).
    ///
    /// # Return value
    ///
    /// Input data wrapped inside a vector.
    fn new(data: Vec<Self::Inner>, len: usize) -> Self;
    /// Set the value at an index.
    ///
    /// Depending on internal representation, this can be an expensive operation (for
    /// `SparseVector`'s, the cost depends on the (lack of) sparsity. Setting a zero value removes
    /// the element from a `SparseVector`.
    fn set(&mut self, index: usize, value: F);
    /// Retrieve the value at an index.
    ///
    /// # Returns
    ///
    /// `None` if the representation is `Sparse` and the value at the index is zero.
    fn get(&self, index: usize) -> Option<&F>;
    /// Iterate over the internal values.
    fn iter(&self) -> Iter<'_, Self::Inner>;
    /// Number of items represented by the vector.
    fn len(&self) -> usize;
    /// Whether the vector is empty.
    fn is_empty(&self) -> bool;
    /// Get the size of the internal data structure (and not of the represented vector).
    fn size(&self) -> usize;
}
