//! # linvec
//! Small generic linear algebra library.
//!
//! Vectors have a dimension and an element type fixed at compile time, live on
//! the stack and never allocate. Operations mixing vectors of different
//! dimensions or precisions do not compile.
//!
//! ```
//! use linvec::{angle, cross, vec2_from_angle, vector, AngleUnit, Vec3};
//!
//! let x: Vec3 = vector![1.0, 0.0, 0.0];
//! let y: Vec3 = vector![0.0, 1.0, 0.0];
//! assert_eq!(cross(&x, &y), vector![0.0, 0.0, 1.0]);
//! assert!((angle(&x, &y).unwrap() - std::f64::consts::FRAC_PI_2 as linvec::Flt).abs() < 1e-6);
//!
//! let dir = vec2_from_angle(90.0f64, AngleUnit::Degrees);
//! assert!((dir.y() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Degenerate inputs
//!
//! A zero divisor is treated as an error everywhere: [`normalize`], [`angle`]
//! and [`project`] return [`MathError::ZeroMagnitude`], the checked divisions
//! [`Vector::try_div`] and [`Vector::try_div_elem`] return
//! [`MathError::DivisionByZero`], and the `/` and `/=` operators panic.
//! Infinite or NaN components make [`normalize`], [`angle`] and [`project`]
//! fail with [`MathError::NonFinite`]. Lengths are computed with scaling, so
//! very large or very small finite vectors still normalize.
#![warn(missing_docs)]

mod angle;
mod consts;
pub mod error;
mod geometry;
pub mod utils;
mod vector;

pub use angle::*;
pub use consts::Real;
pub use error::MathError;
pub use geometry::*;
#[doc(hidden)]
pub use vector::cast_component;
pub use vector::Vector;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default floating point type of the `Vec2`, `Vec3` and `Vec4`
        /// aliases.
        pub type Flt = f64;
    } else {
        /// Default floating point type of the `Vec2`, `Vec3` and `Vec4`
        /// aliases.
        pub type Flt = f32;
    }
}

/// Single precision vector.
pub type LowpVec<const N: usize> = Vector<f32, N>;
/// Double precision vector.
pub type MedpVec<const N: usize> = Vector<f64, N>;
/// Highest precision vector available.
///
/// Stable Rust has no extended precision float, so this is double precision.
pub type HighpVec<const N: usize> = Vector<f64, N>;

/// 2D single precision vector.
pub type LowpVec2 = LowpVec<2>;
/// 3D single precision vector.
pub type LowpVec3 = LowpVec<3>;
/// 4D single precision vector.
pub type LowpVec4 = LowpVec<4>;
/// 2D double precision vector.
pub type MedpVec2 = MedpVec<2>;
/// 3D double precision vector.
pub type MedpVec3 = MedpVec<3>;
/// 4D double precision vector.
pub type MedpVec4 = MedpVec<4>;
/// 2D highest precision vector.
pub type HighpVec2 = HighpVec<2>;
/// 3D highest precision vector.
pub type HighpVec3 = HighpVec<3>;
/// 4D highest precision vector.
pub type HighpVec4 = HighpVec<4>;

/// 2D vector of the default precision.
pub type Vec2 = Vector<Flt, 2>;
/// 3D vector of the default precision.
pub type Vec3 = Vector<Flt, 3>;
/// 4D vector of the default precision.
pub type Vec4 = Vector<Flt, 4>;
