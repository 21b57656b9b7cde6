//! # Complex numbers
//!
//! Complex numbers over any real scalar. Over rationals these stay exact, over `f64` they inherit
//! the rounding behaviour of the components.
use std::error::Error;
use std::str::FromStr;

use num::complex::Complex;
use num_traits::{Num, NumAssign};

use crate::data::number_types::rational::Rational64;
use crate::data::number_types::traits::{RealScalar, Scalar};

/// Complex number with `f64` components.
pub type ComplexF64 = Complex<f64>;
/// Complex number with exact rational components.
pub type ComplexRational = Complex<Rational64>;

/// A complex number is zero when both components are exactly zero.
///
/// The magnitude is the squared norm: it orders values the same way as the modulus does, and it
/// does not require a square root, so it remains exact for rational components.
impl<T> Scalar for Complex<T>
where
    T: RealScalar + Num + NumAssign,
    <T as FromStr>::Err: Error,
{
    type Magnitude = T;

    fn magnitude(&self) -> Self::Magnitude {
        self.norm_sqr()
    }
}
