//! # Rational numbers
//!
//! Primary way to do exact computation. All values are kept in lowest terms by `num`'s `Ratio`,
//! so structural equality is mathematical equality and the zero test is exact.
use num::rational::Ratio;
use num_traits::Signed;

pub use num::BigInt;

use crate::data::number_types::traits::{RealScalar, Scalar};

/// Rational with 32 bit numerator and denominator.
pub type Rational32 = Ratio<i32>;
/// Rational with 64 bit numerator and denominator.
pub type Rational64 = Ratio<i64>;
/// Rational with 128 bit numerator and denominator.
pub type Rational128 = Ratio<i128>;
/// Arbitrary precision rational.
pub type RationalBig = Ratio<BigInt>;

macro_rules! impl_rational {
    ($in_t:ty) => {
        /// Except for the finiteness of the type, this is correct.
        impl Scalar for Ratio<$in_t> {
            type Magnitude = Self;

            fn magnitude(&self) -> Self::Magnitude {
                Signed::abs(self)
            }
        }

        impl RealScalar for Ratio<$in_t> {
        }
    }
}
impl_rational!(i32);
impl_rational!(i64);
impl_rational!(i128);
impl_rational!(BigInt);

/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational32::new($numer, $denom)
    };
}
/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational64::new($numer, $denom)
    };
}
/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational128::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational128::new($numer, $denom)
    };
}
/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::RationalBig::from_integer(
            $crate::data::number_types::rational::BigInt::from($value),
        )
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::RationalBig::new(
            $crate::data::number_types::rational::BigInt::from($numer),
            $crate::data::number_types::rational::BigInt::from($denom),
        )
    };
}
