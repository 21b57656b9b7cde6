//! # Sparse linear algebra over exact and inexact fields
//!
//! Matrices and vectors are generic over a `Scalar`: rational numbers for exact results, complex
//! rationals, or floating point numbers. The main type is the row major `SparseMatrix`, with
//! `DenseMatrix`, `SparseVector`, `DenseVector` and `SymmetricTridiagonal` around it.
//!
//! Exact scalars make the algorithms exact: a determinant, inverse or solution computed over the
//! rationals has no rounding error.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;

#[cfg(test)]
mod tests;
