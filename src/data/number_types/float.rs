//! # Floating point numbers
//!
//! Faster than rational numbers, but correctness guarantees are harder (impossible?) to give due
//! to (accumulating) rounding errors. The exact zero test means that a value which should cancel
//! but is off by a rounding error stays stored.
use crate::data::number_types::traits::{RealScalar, Scalar};

impl Scalar for f64 {
    type Magnitude = Self;

    fn magnitude(&self) -> Self::Magnitude {
        f64::abs(*self)
    }
}

impl RealScalar for f64 {
}
