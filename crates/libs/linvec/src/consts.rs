//! Element types accepted by [`Vector`](crate::Vector) and the constants they
//! carry.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point element type of a vector.
///
/// Every element type provides its own compile-time constants, rounded for
/// its representation, so that single and double precision vectors do not
/// share a value of PI computed in the wrong precision.
pub trait Real:
    Float
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Archimedes' constant (π).
    const PI: Self;

    /// Measure of a straight angle (π) in degrees.
    const STRAIGHT_ANGLE_DEG: Self;
}

macro_rules! impl_real {
    ($($t:ident),*) => {
        $(
            impl Real for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const PI: Self = std::$t::consts::PI;
                const STRAIGHT_ANGLE_DEG: Self = 180.0;
            }
        )*
    };
}

impl_real!(f32, f64);
