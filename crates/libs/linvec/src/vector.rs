//! Fixed-dimension vectors.

mod arith;

use crate::{
    error::{MathError, Result},
    geometry, utils, AngleUnit, Real,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::AsPrimitive;
use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

/// A vector of `N` components of the floating-point type `T`.
///
/// The dimension `N` and the element type `T` are part of the type, so mixing
/// shapes or precisions is rejected by the compiler:
///
/// ```compile_fail
/// use linvec::Vector;
/// // Three components expected, two given.
/// let v = Vector::<f32, 3>::new([1.0, 2.0]);
/// ```
///
/// ```compile_fail
/// use linvec::Vector;
/// // Three components expected, four given.
/// let v = Vector::<f32, 3>::new([1.0, 2.0, 3.0, 4.0]);
/// ```
///
/// ```compile_fail
/// use linvec::Vector;
/// let v = Vector::<f32, 2>::zeros() + Vector::<f32, 3>::zeros();
/// ```
///
/// ```compile_fail
/// use linvec::Vector;
/// let v = Vector::<f32, 3>::zeros() + Vector::<f64, 3>::zeros();
/// ```
///
/// ```compile_fail
/// use linvec::Vector;
/// let mut v = Vector::<f32, 3>::zeros();
/// v = Vector::<f32, 4>::zeros();
/// ```
///
/// Axis accessors only exist up to the dimension of the vector:
///
/// ```compile_fail
/// use linvec::Vector;
/// let z = Vector::<f32, 2>::zeros().z();
/// ```
///
/// ```compile_fail
/// use linvec::Vector;
/// let empty = Vector::<f32, 0>::zeros();
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

/// Creates a [`Vector`] from its components.
///
/// The number of components decides the dimension of the vector.
///
/// ```
/// use linvec::{vector, Vector};
/// let v: Vector<f32, 3> = vector![1.0, 2.0, 3.0];
/// assert_eq!(v.dimension(), 3);
/// ```
///
/// Prefixing the element type converts every component to it on its own, so
/// the components may have different numeric types:
///
/// ```
/// use linvec::{vector, Vector};
/// let v = vector![f32; 1, 2.5, 3u8];
/// assert_eq!(v, Vector::new([1.0, 2.5, 3.0]));
/// ```
#[macro_export]
macro_rules! vector {
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::new([$($value),+])
    };
    ($t:ty; $($value:expr),+ $(,)?) => {
        $crate::Vector::new([$($crate::cast_component::<$t, _>($value)),+])
    };
}

/// Converts one component to `T`; used by [`vector!`].
#[doc(hidden)]
#[inline]
pub fn cast_component<T: Real, U: AsPrimitive<T>>(value: U) -> T { value.as_() }

impl<T: Real, const N: usize> Vector<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "a vector must have at least one component");

    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from exactly `N` components.
    #[inline]
    pub const fn new(values: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        Self(values)
    }

    /// Creates a vector with all components set to zero.
    #[inline]
    pub const fn zeros() -> Self { Self::splat(T::ZERO) }

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self { Self::new([value; N]) }

    /// Creates a vector from `N` values convertible to `T`.
    ///
    /// For components of different types use `vector![T; ...]`.
    ///
    /// ```
    /// use linvec::Vector;
    /// let v = Vector::<f64, 3>::cast_from([1, 2, 3]);
    /// assert_eq!(v, Vector::new([1.0, 2.0, 3.0]));
    /// ```
    #[inline]
    pub fn cast_from<U: AsPrimitive<T>>(values: [U; N]) -> Self {
        Self::new(values.map(|v| v.as_()))
    }

    /// Returns the number of components.
    #[inline]
    pub const fn dimension(&self) -> usize { N }

    /// Returns the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Iterates over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Iterates mutably over the components.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<F: FnMut(T) -> T>(self, f: F) -> Self { Self(self.0.map(f)) }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_with<F: FnMut(T, T) -> T>(self, other: Self, mut f: F) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Sum of all components.
    #[inline]
    pub fn sum(&self) -> T { self.0.iter().fold(T::ZERO, |acc, &v| acc + v) }

    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(&self) -> T { geometry::dot(self, self) }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> T { geometry::magnitude(self) }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Fails with [`MathError::ZeroMagnitude`] for the zero vector.
    #[inline]
    pub fn normalize(&self) -> Result<Self> { geometry::normalize(self) }

    /// Normalizes the vector in place.
    ///
    /// The vector is left untouched when the normalization fails.
    pub fn normalize_mut(&mut self) -> Result<()> {
        *self = geometry::normalize(self)?;
        Ok(())
    }

    /// Dot product with `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T { geometry::dot(self, other) }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T { geometry::distance(self, other) }

    /// Angle in radians between `self` and `other`.
    #[inline]
    pub fn angle(&self, other: &Self) -> Result<T> { geometry::angle(self, other) }

    /// Clamps every component to `[min, max]`.
    #[inline]
    pub fn clamp(self, min: T, max: T) -> Self { self.map(|v| utils::clamp(v, min, max)) }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool { self.0.iter().all(|v| v.is_finite()) }

    /// Divides every component by `rhs`.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `rhs` is zero.
    pub fn try_div(self, rhs: T) -> Result<Self> {
        if rhs == T::ZERO {
            log::debug!("refusing to divide {} by zero", self);
            return Err(MathError::DivisionByZero);
        }
        Ok(self.map(|v| v / rhs))
    }

    /// Divides component by component.
    ///
    /// Fails with [`MathError::DivisionByZero`] when any component of `rhs` is
    /// zero.
    pub fn try_div_elem(self, rhs: &Self) -> Result<Self> {
        if rhs.0.iter().any(|&v| v == T::ZERO) {
            log::debug!("refusing to divide {} by {} with a zero component", self, rhs);
            return Err(MathError::DivisionByZero);
        }
        Ok(self.zip_with(*rhs, |a, b| a / b))
    }
}

macro_rules! axis_accessors {
    ($($axis:ident, $axis_mut:ident, $check:ident, $idx:literal);* $(;)?) => {
        impl<T: Real, const N: usize> Vector<T, N> {
            $(
                const $check: () = assert!(
                    N > $idx,
                    concat!("the vector has no ", stringify!($axis), " component")
                );

                #[doc = concat!("Returns the ", stringify!($axis), " component.")]
                #[inline]
                pub fn $axis(&self) -> T {
                    #[allow(clippy::let_unit_value)]
                    let () = Self::$check;
                    self.0[$idx]
                }

                #[doc = concat!("Returns a mutable reference to the ", stringify!($axis), " component.")]
                #[inline]
                pub fn $axis_mut(&mut self) -> &mut T {
                    #[allow(clippy::let_unit_value)]
                    let () = Self::$check;
                    &mut self.0[$idx]
                }
            )*
        }
    };
}

axis_accessors! {
    x, x_mut, HAS_X, 0;
    y, y_mut, HAS_Y, 1;
    z, z_mut, HAS_Z, 2;
    w, w_mut, HAS_W, 3;
}

impl<T: Real> Vector<T, 2> {
    /// Creates the unit vector `(cos θ, sin θ)` for `angle` given in `unit`.
    #[inline]
    pub fn from_angle(angle: T, unit: AngleUnit) -> Self { geometry::vec2_from_angle(angle, unit) }
}

impl<T: Real> Vector<T, 3> {
    /// Cross product with `other`.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self { geometry::cross(self, other) }
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zeros() }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(values: [T; N]) -> Self { Self::new(values) }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Real, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T: Real, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}

impl<T: Real, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

impl<T: Real, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T: Real, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T: Real, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(v, f)?;
        }
        write!(f, ")")
    }
}

impl<T: Real, const N: usize> AbsDiffEq for Vector<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Real, const N: usize> RelativeEq for Vector<T, N> {
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Real, const N: usize> UlpsEq for Vector<T, N> {
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LowpVec3, MedpVec2, MedpVec4};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn construction() {
        let zero = Vector::<f32, 5>::zeros();
        assert!(zero.iter().all(|&v| v == 0.0));
        assert_eq!(zero, Vector::default());

        let ones = MedpVec4::splat(1.5);
        assert_eq!(ones.into_array(), [1.5; 4]);

        let v = LowpVec3::new([1.0, 2.0, 3.0]);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(v, vector![1.0, 2.0, 3.0]);
        assert_eq!(v, LowpVec3::from([1.0, 2.0, 3.0]));
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);

        let c = Vector::<f32, 2>::cast_from([3u8, 7]);
        assert_eq!(c, vector![3.0, 7.0]);

        let mixed = vector![f32; 1, 2.5f64, 3u16, -4i64];
        assert_eq!(mixed, Vector::new([1.0, 2.5, 3.0, -4.0]));
        assert_eq!(vector![f64; 7,].dimension(), 1);
    }

    #[test]
    fn dimension() {
        assert_eq!(Vector::<f32, 7>::zeros().dimension(), 7);
        assert_eq!(MedpVec2::DIM, 2);
    }

    #[test]
    fn assignment_copies_all_components() {
        let a = MedpVec4::new([1.0, 2.0, 3.0, 4.0]);
        let mut b = MedpVec4::zeros();
        assert_ne!(a, b);
        b = a;
        assert_eq!(a, b);
        b[0] = 9.0;
        assert_eq!(a[0], 1.0);
    }

    #[test]
    fn axis_access_aliases_storage() {
        let mut v = Vector::<f64, 4>::new([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));

        *v.y_mut() = 20.0;
        assert_eq!(v[1], 20.0);
        v[3] = 40.0;
        assert_eq!(v.w(), 40.0);
        *v.x_mut() += 1.0;
        *v.z_mut() *= 2.0;
        assert_eq!(v.as_slice(), &[2.0, 20.0, 6.0, 40.0]);

        let wide = Vector::<f32, 6>::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(wide.w(), 4.0);
    }

    #[test]
    fn iteration() {
        let mut v = vector![1.0f32, 2.0, 3.0];
        for c in v.iter_mut() {
            *c *= 2.0;
        }
        assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![2.0, 4.0, 6.0]);
        assert_eq!((&v).into_iter().count(), 3);
        assert_eq!(v.sum(), 12.0);
        assert_eq!(v.as_ref().len(), 3);
        v.as_mut_slice()[0] = 0.0;
        assert_eq!(v.x(), 0.0);
    }

    #[test]
    fn map_and_zip() {
        let a = vector![1.0f64, -2.0, 3.0];
        let b = vector![4.0f64, 5.0, -6.0];
        assert_eq!(a.map(f64::abs), vector![1.0, 2.0, 3.0]);
        assert_eq!(a.zip_with(b, f64::max), vector![4.0, 5.0, 3.0]);
        assert_eq!(b.clamp(-1.0, 1.0), vector![1.0, 1.0, -1.0]);
    }

    #[test]
    fn finiteness() {
        assert!(vector![1.0f32, 2.0].is_finite());
        assert!(!vector![1.0f32, f32::INFINITY].is_finite());
        assert!(!vector![f64::NAN, 0.0, 0.0].is_finite());
    }

    #[test]
    fn checked_division() {
        let v = vector![2.0f64, 4.0, 8.0];
        assert_eq!(v.try_div(2.0), Ok(vector![1.0, 2.0, 4.0]));
        assert_eq!(v.try_div(0.0), Err(MathError::DivisionByZero));
        assert_eq!(v.try_div(-0.0), Err(MathError::DivisionByZero));
        assert_eq!(
            v.try_div_elem(&vector![2.0, 2.0, 4.0]),
            Ok(vector![1.0, 2.0, 2.0])
        );
        assert_eq!(
            v.try_div_elem(&vector![1.0, 0.0, 1.0]),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn in_place_normalization() {
        let mut v = vector![0.0f64, 3.0, 4.0];
        assert!(v.normalize_mut().is_ok());
        assert_relative_eq!(v, vector![0.0, 0.6, 0.8]);

        let mut zero = Vector::<f64, 3>::zeros();
        assert_eq!(
            zero.normalize_mut(),
            Err(MathError::ZeroMagnitude { op: "normalize" })
        );
        assert_eq!(zero, Vector::zeros());
    }

    #[test]
    fn display() {
        assert_eq!(vector![1.0f32, 2.5, -3.0].to_string(), "(1, 2.5, -3)");
        assert_eq!(Vector::<f64, 1>::splat(0.5).to_string(), "(0.5)");
    }

    #[test]
    fn approximate_equality() {
        let a = vector![1.0f64, 2.0, 3.0];
        let b = a + 1e-12;
        assert_ne!(a, b);
        assert_relative_eq!(a, b, epsilon = 1e-9);
        assert!(approx::abs_diff_ne!(a, a + 1e-3, epsilon = 1e-6));
        assert!(approx::ulps_eq!(a, a));
    }

    proptest! {
        #[test]
        fn broadcast_fills_every_slot(s in -1e6f32..1e6) {
            let v = Vector::<f32, 4>::splat(s);
            prop_assert!(v.iter().all(|&c| c == s));
        }

        #[test]
        fn indexing_matches_axes(c in prop::array::uniform4(-1e3f64..1e3)) {
            let v = Vector::new(c);
            prop_assert_eq!(v.x(), v[0]);
            prop_assert_eq!(v.y(), v[1]);
            prop_assert_eq!(v.z(), v[2]);
            prop_assert_eq!(v.w(), v[3]);
        }
    }
}
