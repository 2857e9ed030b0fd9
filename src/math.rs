//! Angle units and normalisation helpers.
//!
//! Every formula in this crate works in radians, while everything a caller
//! hands in (latitude, longitude, threshold angles) is in degrees. The two
//! newtypes below make the conversion explicit so that mixing them up is a
//! type error instead of a wrong sunrise.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, Neg, Sub};

/// An angle in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Radians(pub f64);

impl Degrees {
    /// Wraps a raw value in degrees.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value in degrees.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Converts to radians. This is the only way degrees enter the trig chain.
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }
}

impl Radians {
    /// Wraps a raw value in radians.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw value in radians.
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl From<Degrees> for Radians {
    fn from(degrees: Degrees) -> Self {
        degrees.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(radians: Radians) -> Self {
        radians.to_degrees()
    }
}

impl Add for Radians {
    type Output = Radians;

    fn add(self, rhs: Radians) -> Radians {
        Radians(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Radians;

    fn sub(self, rhs: Radians) -> Radians {
        Radians(self.0 - rhs.0)
    }
}

impl Neg for Radians {
    type Output = Radians;

    fn neg(self) -> Radians {
        Radians(-self.0)
    }
}

impl Neg for Degrees {
    type Output = Degrees;

    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*}°", precision, self.0)
        } else {
            write!(f, "{}°", self.0)
        }
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.*} rad", precision, self.0)
        } else {
            write!(f, "{} rad", self.0)
        }
    }
}

/// Computes the floored modulo operation (Python-style modulo).
///
/// Unlike Rust's `%` operator which can return negative values, this function
/// always returns a non-negative result in the range [0, m).
///
/// # Examples
///
/// ```
/// # fn floored_mod(x: f64, m: f64) -> f64 { ((x % m) + m) % m }
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);
/// assert_eq!(floored_mod(1.5, 1.0), 0.5);
/// ```
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

/// Normalizes an angle to the range [0, 2π).
pub fn normalize_radians_2pi(angle: Radians) -> Radians {
    Radians(floored_mod(angle.0, 2.0 * PI))
}

/// Folds an angle into (-π, π].
pub(crate) fn normalize_radians_pi(angle: Radians) -> Radians {
    let wrapped = PI - floored_mod(PI - angle.0, 2.0 * PI);
    Radians(wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_radians_conversion_is_explicit_and_reversible() {
        let lat = Degrees(55.0);
        let rad = lat.to_radians();
        assert!((rad.value() - 55.0 * PI / 180.0).abs() < 1e-15);
        assert!((rad.to_degrees().value() - 55.0).abs() < 1e-12);
        assert_eq!(Radians::from(Degrees(180.0)), Radians(PI));
    }

    #[test]
    fn normalizing_keeps_angles_in_range() {
        assert!((normalize_radians_2pi(Radians(-PI / 2.0)).value() - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((normalize_radians_2pi(Radians(5.0 * PI)).value() - PI).abs() < 1e-12);
        assert!((normalize_radians_pi(Radians(-PI)).value() - PI).abs() < 1e-12);
        assert!((normalize_radians_pi(Radians(3.0 * PI / 2.0)).value() + PI / 2.0).abs() < 1e-12);
        assert!(normalize_radians_pi(Radians(f64::NAN)).is_nan());
    }
}
