//! Conversion between angle units.

use crate::{error::MathError, Real};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Tells how a bare scalar angle should be interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Angle measured in degrees.
    Degrees,
    /// Angle measured in radians.
    #[default]
    Radians,
}

impl AngleUnit {
    /// The name of the unit.
    pub const fn name(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degree",
            AngleUnit::Radians => "radian",
        }
    }

    /// The symbols accepted for the unit; the first one is used for display.
    pub const fn symbols(&self) -> &'static [&'static str] {
        match self {
            AngleUnit::Degrees => &["deg", "degs", "degrees", "°"],
            AngleUnit::Radians => &["rad", "rads", "radians"],
        }
    }

    /// Interprets `value` as an angle in this unit and returns it in radians.
    #[inline]
    pub fn to_radians<T: Real>(self, value: T) -> T {
        match self {
            AngleUnit::Degrees => deg_to_rad(value),
            AngleUnit::Radians => value,
        }
    }

    /// Interprets `value` as an angle in this unit and returns it in degrees.
    #[inline]
    pub fn to_degrees<T: Real>(self, value: T) -> T {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => rad_to_deg(value),
        }
    }
}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.symbols()[0]) }
}

impl FromStr for AngleUnit {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = s.trim().to_ascii_lowercase();
        [AngleUnit::Degrees, AngleUnit::Radians]
            .into_iter()
            .find(|u| u.symbols().contains(&unit.as_str()))
            .ok_or_else(|| MathError::InvalidAngleUnit(s.trim().to_string()))
    }
}

/// Converts an angle from degrees to radians.
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T { degrees * (T::PI / T::STRAIGHT_ANGLE_DEG) }

/// Converts an angle from radians to degrees.
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T { radians * (T::STRAIGHT_ANGLE_DEG / T::PI) }

/// Converts `angle` into the `target` unit.
///
/// The source unit is implied: converting to [`AngleUnit::Radians`] treats
/// `angle` as degrees and the other way round.
#[inline]
pub fn angle_convert<T: Real>(angle: T, target: AngleUnit) -> T {
    match target {
        AngleUnit::Radians => deg_to_rad(angle),
        AngleUnit::Degrees => rad_to_deg(angle),
    }
}
