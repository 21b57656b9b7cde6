//! # Tests that combine several parts of the crate.
//!
//! Convention for module contents:
//!
//! * `scenario`: small, hand checked problems, solved along every available path
//! * `random`: seeded random operands, checked against dense reference computations
use rand::Rng;
use rand::rngs::StdRng;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::vector::{DenseVector, Vector};
use crate::data::linear_algebra::vector::test::TestVector;
use crate::data::number_types::rational::Rational64;
use crate::data::number_types::traits::{NonZero, Scalar};
use crate::R64;

mod scenario;

/// Create a rational matrix from rows of integers.
pub fn matrix(data: Vec<Vec<i64>>) -> SparseMatrix<Rational64> {
    let rows = data.into_iter().map(DenseVector::from_test_data).collect::<Vec<_>>();
    SparseMatrix::from_vectors(&rows, false).unwrap()
}

/// Random rational matrix in which each value is nonzero with probability `density`.
///
/// Values are fractions with small numerators and denominators.
pub fn random_sparse(
    rng: &mut StdRng,
    nr_rows: usize,
    nr_columns: usize,
    density: f64,
) -> SparseMatrix<Rational64> {
    let mut triplets = Vec::new();
    for i in 0..nr_rows {
        for j in 0..nr_columns {
            if rng.gen_bool(density) {
                let numerator = rng.gen_range(-9..=9);
                let denominator = rng.gen_range(1..=4);
                triplets.push((i, j, R64!(numerator, denominator)));
            }
        }
    }

    SparseMatrix::from_triplets(nr_rows, nr_columns, triplets).unwrap()
}

/// Whether no stored value of the matrix is zero.
pub fn only_nonzeros_stored<F: Scalar>(matrix: &SparseMatrix<F>) -> bool {
    matrix.rows().all(|row| row.iter().all(|(_, value)| value.is_not_zero()))
}
