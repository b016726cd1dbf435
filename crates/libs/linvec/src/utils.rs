//! Utility functions.

use crate::Real;

/// Clamps `value` to the closed interval `[min, max]`.
///
/// The upper bound is applied first, so with `min > max` the result is `min`.
/// NaN passes through unchanged.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let value = if value > max { max } else { value };
    if value < min {
        min
    } else {
        value
    }
}

/// Clamps `value` to `[0, 1]`.
#[inline]
pub fn clamp01<T: Real>(value: T) -> T { clamp(value, T::ZERO, T::ONE) }
