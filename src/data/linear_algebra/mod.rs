//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in either a dense or a sparse format.
pub mod matrix;
pub mod vector;

/// Index and value of a nonzero element in a sparse data structure.
///
/// Collections of these are kept sorted by index.
pub type SparseTuple<F> = (usize, F);
