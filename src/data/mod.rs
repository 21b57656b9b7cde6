//! # Storing of matrices in memory
//!
//! This module provides the scalar types and the data structures used to represent vectors and
//! matrices in memory. Algorithms on these structures live in `algorithm`.

pub mod linear_algebra;
pub mod number_types;
