//! # Traits
//!
//! The matrix algorithms are defined over a field. The hierarchy is "mathematically exact", but
//! not every implementation is. That is, the contracts that these traits define, or their names
//! imply, may not be kept precisely by floating point types. This is due to finite representation
//! of these numbers and is a fundamental problem that cannot be avoided.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

/// Basic field operations with `Self` and with references to `Self`.
///
/// The zero test of `Zero::is_zero` is exact: it is the test that decides whether a value gets
/// stored in a sparse data structure. For exact types (rationals, complex rationals) this is the
/// mathematical zero; for floating point types it is a bitwise-equal-to-zero comparison and
/// callers should be aware that tiny rounding residues are stored.
pub trait Scalar:
    PartialEq +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +

    // Practicalities
    FromStr<Err: Display> +
    Clone +
    Display +
    Debug +
    Send +
    Sync +
{
    /// Type in which the size of a value is expressed.
    ///
    /// Only the ordering of magnitudes is used, to select the largest pivot candidate.
    type Magnitude: PartialOrd;

    /// Size of the value.
    ///
    /// For real types this is the absolute value. Complex types may return any quantity that is
    /// monotone in the modulus, such as the squared norm, which stays exact for complex
    /// rationals.
    fn magnitude(&self) -> Self::Magnitude;
}

/// A scalar that is its own magnitude and totally ordered, like the real numbers.
///
/// Complex scalars are built on top of these.
pub trait RealScalar: Scalar<Magnitude=Self> + PartialOrd {
    /// Absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity.
    fn abs(&self) -> Self {
        if *self < Self::zero() {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

/// Whether a value is not the additive identity.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait NonZero {
    /// Whether the value is not the exact zero.
    fn is_not_zero(&self) -> bool;
}
impl<T: Zero> NonZero for T {
    fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }
}
