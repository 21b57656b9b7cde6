//! # Strassen multiplication
//!
//! One level of Strassen's scheme: seven products of half size matrices instead of eight. The
//! half size products use the regular sparse multiplication. For sparse operands this is usually
//! slower than multiplying directly, because the sums of quadrants are denser than the quadrants
//! themselves.
use log::debug;

use crate::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use crate::data::number_types::traits::Scalar;
use crate::error::LinalgError;

impl<F: Scalar> SparseMatrix<F> {
    /// Product of two square matrices of the same size.
    ///
    /// Odd sizes are padded with a zero row and column, which are removed from the result.
    pub fn times_strassen(&self, other: &Self) -> Result<Self, LinalgError> {
        let n = self.nr_rows();
        if !self.is_square() || self.shape() != other.shape() {
            return Err(LinalgError::dimension_mismatch("Strassen multiplication", self.shape(), other.shape()));
        }
        if n <= 1 {
            return self * other;
        }

        let half = n.div_ceil(2);
        debug!("Strassen multiplication of {}x{} matrices with quadrants of size {}", n, n, half);

        let [a11, a12, a21, a22] = quadrants(self, half)?;
        let [b11, b12, b21, b22] = quadrants(other, half)?;

        let m1 = (&(&a11 + &a22)? * &(&b11 + &b22)?)?;
        let m2 = (&(&a21 + &a22)? * &b11)?;
        let m3 = (&a11 * &(&b12 - &b22)?)?;
        let m4 = (&a22 * &(&b21 - &b11)?)?;
        let m5 = (&(&a11 + &a12)? * &b22)?;
        let m6 = (&(&a21 - &a11)? * &(&b11 + &b12)?)?;
        let m7 = (&(&a12 - &a22)? * &(&b21 + &b22)?)?;

        let mut c11 = (&m1 + &m4)?;
        c11.sub_assign_matrix(&m5)?;
        c11.add_assign_matrix(&m7)?;
        let c12 = (&m3 + &m5)?;
        let c21 = (&m2 + &m4)?;
        let mut c22 = (&m1 - &m2)?;
        c22.add_assign_matrix(&m3)?;
        c22.add_assign_matrix(&m6)?;

        let padded = c11.hcat(&c12)?.vcat(&c21.hcat(&c22)?)?;
        padded.slice(0..n, 0..n)
    }
}

/// Split a square matrix in four quadrants of size `half`, padding with zeros if needed.
///
/// # Return value
///
/// Top left, top right, bottom left and bottom right quadrants.
fn quadrants<F: Scalar>(matrix: &SparseMatrix<F>, half: usize) -> Result<[SparseMatrix<F>; 4], LinalgError> {
    let n = matrix.nr_rows();
    let padding = 2 * half - n;

    let padded = matrix
        .hcat(&SparseMatrix::new(n, padding))?
        .vcat(&SparseMatrix::new(padding, 2 * half))?;

    Ok([
        padded.slice(0..half, 0..half)?,
        padded.slice(0..half, half..2 * half)?,
        padded.slice(half..2 * half, 0..half)?,
        padded.slice(half..2 * half, half..2 * half)?,
    ])
}
