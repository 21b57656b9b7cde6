//! # Algorithms
//!
//! Factorization, elimination and multiplication routines on sparse matrices. They are
//! implemented as methods on `SparseMatrix`, grouped per technique:
//!
//! * `lower_upper`: LU decomposition without pivoting and triangular solves
//! * `gauss_jordan`: inversion with partial pivoting, row reduction and nullspaces
//! * `determinant`: cofactor expansion
//! * `strassen`: one level of Strassen multiplication
pub mod determinant;
pub mod gauss_jordan;
pub mod lower_upper;
pub mod strassen;

pub use lower_upper::LUDecomposition;
