//! Geometric operations on vectors.
//!
//! Operations that divide by a magnitude report a zero-magnitude input as
//! [`MathError::ZeroMagnitude`] and a non-finite input as
//! [`MathError::NonFinite`] instead of producing NaN.

use crate::{
    error::{MathError, Result},
    utils::clamp,
    AngleUnit, Real, Vector,
};

/// Largest absolute component of `v`.
fn max_abs<T: Real, const N: usize>(v: &Vector<T, N>) -> T {
    v.iter().fold(T::ZERO, |acc, &c| acc.max(c.abs()))
}

/// Euclidean length of `v`.
///
/// Components are scaled by the largest one before squaring, so the length
/// of a finite vector is finite whenever it is representable.
pub fn magnitude<T: Real, const N: usize>(v: &Vector<T, N>) -> T {
    let scale = max_abs(v);
    if scale == T::ZERO || !v.is_finite() {
        return v.magnitude_squared().sqrt();
    }
    v.map(|c| c / scale).magnitude_squared().sqrt() * scale
}

/// Unit vector along `v`, or the reason there is none.
fn direction<T: Real, const N: usize>(
    v: &Vector<T, N>,
    op: &'static str,
) -> Result<Vector<T, N>> {
    if !v.is_finite() {
        log::debug!("cannot {} {}: non-finite component", op, v);
        return Err(MathError::NonFinite { op });
    }
    let scale = max_abs(v);
    if scale == T::ZERO {
        log::debug!("cannot {} {}: zero magnitude", op, v);
        return Err(MathError::ZeroMagnitude { op });
    }
    // Scaled components lie in [-1, 1], so the length is in [1, sqrt(N)].
    let scaled = v.map(|c| c / scale);
    let len = scaled.magnitude_squared().sqrt();
    Ok(scaled.map(|c| c / len))
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// Fails with [`MathError::ZeroMagnitude`] for the zero vector and with
/// [`MathError::NonFinite`] when a component is infinite or NaN.
#[inline]
pub fn normalize<T: Real, const N: usize>(v: &Vector<T, N>) -> Result<Vector<T, N>> {
    direction(v, "normalize")
}

/// Dot product of two vectors.
#[inline]
pub fn dot<T: Real, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.iter().zip(b.iter()).fold(T::ZERO, |acc, (&x, &y)| acc + x * y)
}

/// Cross product of two 3D vectors.
///
/// Only defined in three dimensions:
///
/// ```compile_fail
/// use linvec::{cross, Vector};
/// let a = Vector::<f32, 2>::zeros();
/// let c = cross(&a, &a);
/// ```
#[inline]
pub fn cross<T: Real>(a: &Vector<T, 3>, b: &Vector<T, 3>) -> Vector<T, 3> {
    Vector::new([
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    ])
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<T: Real, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    magnitude(&(a - b))
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared<T: Real, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    (a - b).magnitude_squared()
}

/// Angle in radians between two vectors, in `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before taking the arc cosine, so nearly
/// parallel vectors give `0` or `π` rather than NaN. Both vectors are
/// normalized first, which keeps the cosine finite for large inputs.
pub fn angle<T: Real, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> Result<T> {
    let op = "compute the angle of";
    let cos = dot(&direction(a, op)?, &direction(b, op)?);
    if cos.abs() > T::ONE {
        log::trace!("clamping cosine {} to [-1, 1]", cos);
    }
    Ok(clamp(cos, -T::ONE, T::ONE).acos())
}

/// Creates the unit vector `(cos θ, sin θ)`.
///
/// `angle` is interpreted in `unit` and converted to radians first.
pub fn vec2_from_angle<T: Real>(angle: T, unit: AngleUnit) -> Vector<T, 2> {
    let (sin, cos) = unit.to_radians(angle).sin_cos();
    Vector::new([cos, sin])
}

/// Same as [`vec2_from_angle`] with the angle given in radians.
#[inline]
pub fn vec2_from_radians<T: Real>(angle: T) -> Vector<T, 2> {
    vec2_from_angle(angle, AngleUnit::Radians)
}

/// Linear interpolation between `a` and `b`; `t = 0` gives `a`, `t = 1`
/// gives `b`.
#[inline]
pub fn lerp<T: Real, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>, t: T) -> Vector<T, N> {
    a + (b - a) * t
}

/// Projects `v` onto the direction of `onto`.
///
/// Fails with [`MathError::NonFinite`] when either input has a non-finite
/// component or the projection itself overflows.
pub fn project<T: Real, const N: usize>(
    v: &Vector<T, N>,
    onto: &Vector<T, N>,
) -> Result<Vector<T, N>> {
    let op = "project onto";
    let dir = direction(onto, op)?;
    let projected = dir * dot(v, &dir);
    if !projected.is_finite() {
        log::debug!("cannot project {} onto {}: non-finite result", v, onto);
        return Err(MathError::NonFinite { op });
    }
    Ok(projected)
}
