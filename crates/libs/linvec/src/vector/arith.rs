//! Arithmetic operators for [`Vector`].
//!
//! Vector-vector operators work component by component; vector-scalar
//! operators broadcast the scalar. Division by zero, whether by a zero scalar
//! or by a vector holding a zero component, panics; use
//! [`Vector::try_div`] or [`Vector::try_div_elem`] to get an error instead.

use super::Vector;
use crate::Real;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

macro_rules! impl_ops {
    ($($trait:ident, $op:ident, $trait_assign:ident, $op_assign:ident);* $(;)?) => {
        $(
            impl<T: Real, const N: usize> $trait_assign for Vector<T, N> {
                #[inline]
                fn $op_assign(&mut self, rhs: Self) {
                    for (a, b) in self.0.iter_mut().zip(rhs.0) {
                        *a = (*a).$op(b);
                    }
                }
            }

            impl<T: Real, const N: usize> $trait_assign<&Vector<T, N>> for Vector<T, N> {
                #[inline]
                fn $op_assign(&mut self, rhs: &Vector<T, N>) { $trait_assign::$op_assign(self, *rhs) }
            }

            impl<T: Real, const N: usize> $trait_assign<T> for Vector<T, N> {
                #[inline]
                fn $op_assign(&mut self, rhs: T) {
                    for a in self.0.iter_mut() {
                        *a = (*a).$op(rhs);
                    }
                }
            }

            impl<T: Real, const N: usize> $trait for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(mut self, rhs: Vector<T, N>) -> Self::Output {
                    $trait_assign::$op_assign(&mut self, rhs);
                    self
                }
            }

            impl<T: Real, const N: usize> $trait<&Vector<T, N>> for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { $trait::$op(self, *rhs) }
            }

            impl<T: Real, const N: usize> $trait<Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output { $trait::$op(*self, rhs) }
            }

            impl<T: Real, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { $trait::$op(*self, *rhs) }
            }

            impl<T: Real, const N: usize> $trait<T> for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(mut self, rhs: T) -> Self::Output {
                    $trait_assign::$op_assign(&mut self, rhs);
                    self
                }
            }

            impl<T: Real, const N: usize> $trait<T> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: T) -> Self::Output { $trait::$op(*self, rhs) }
            }
        )*
    };
}

impl_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
}

impl<T: Real, const N: usize> DivAssign for Vector<T, N> {
    #[track_caller]
    fn div_assign(&mut self, rhs: Self) {
        match self.try_div_elem(&rhs) {
            Ok(v) => *self = v,
            Err(err) => panic!("cannot divide {} by {}: {}", self, rhs, err),
        }
    }
}

impl<T: Real, const N: usize> DivAssign<&Vector<T, N>> for Vector<T, N> {
    #[track_caller]
    fn div_assign(&mut self, rhs: &Vector<T, N>) { DivAssign::div_assign(self, *rhs) }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    #[track_caller]
    fn div_assign(&mut self, rhs: T) {
        match self.try_div(rhs) {
            Ok(v) => *self = v,
            Err(err) => panic!("cannot divide {} by {}: {}", self, rhs, err),
        }
    }
}

impl<T: Real, const N: usize> Div for Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(mut self, rhs: Vector<T, N>) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Real, const N: usize> Div<&Vector<T, N>> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(self, rhs: &Vector<T, N>) -> Self::Output { self / *rhs }
}

impl<T: Real, const N: usize> Div<Vector<T, N>> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(self, rhs: Vector<T, N>) -> Self::Output { *self / rhs }
}

impl<T: Real, const N: usize> Div<&Vector<T, N>> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(self, rhs: &Vector<T, N>) -> Self::Output { *self / *rhs }
}

impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Real, const N: usize> Div<T> for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[track_caller]
    fn div(self, rhs: T) -> Self::Output { *self / rhs }
}

impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|v| -v) }
}

impl<T: Real, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { -*self }
}

/// Scalar on the left-hand side, for the concrete element types.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|v| self + v) }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn sub(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|v| self - v) }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|v| self * v) }
            }

            impl<const N: usize> Mul<&Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: &Vector<$t, N>) -> Self::Output { rhs.map(|v| self * v) }
            }
        )*
    };
}

impl_scalar_lhs_ops!(f32, f64);
