//! Equatorial to horizontal coordinates, and the inverse problem of finding
//! the hour angle at which the sun reaches a given altitude.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{normalize_radians_pi, Degrees, Radians};

/// Greenwich sidereal angle at J2000.0 (degrees)
const SIDEREAL_AT_EPOCH: f64 = 280.16;

/// Sidereal rotation per day (degrees)
const SIDEREAL_RATE: f64 = 360.985_623_5;

/// How altitude is derived from hour angle, latitude and declination.
///
/// `Geometric` is the astronomical formula and the one the sun-times solver
/// inverts. `LegacySine` applies `sin` instead of `asin` to the same
/// argument; it exists only to match output from older ports of suncalc
/// bit for bit, and its values are not angles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AltitudeModel {
    #[default]
    Geometric,
    LegacySine,
}

/// Local sidereal time for `days` since J2000.0 and west longitude `lw`.
pub fn sidereal_time(days: f64, lw: Radians) -> Radians {
    Degrees(SIDEREAL_AT_EPOCH + SIDEREAL_RATE * days).to_radians() - lw
}

/// Local hour angle of an object with right ascension `ra`.
pub fn hour_angle(days: f64, lw: Radians, ra: Radians) -> Radians {
    sidereal_time(days, lw) - ra
}

/// Azimuth from south, positive westward, in (-π, π].
pub fn azimuth(h: Radians, phi: Radians, dec: Radians) -> Radians {
    let raw = h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos());
    normalize_radians_pi(Radians(raw))
}

fn sin_altitude(h: Radians, phi: Radians, dec: Radians) -> f64 {
    phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()
}

/// Altitude above the horizon using the geometric formula.
pub fn altitude(h: Radians, phi: Radians, dec: Radians) -> Radians {
    altitude_with(h, phi, dec, AltitudeModel::Geometric)
}

/// Altitude using the selected model.
pub fn altitude_with(h: Radians, phi: Radians, dec: Radians, model: AltitudeModel) -> Radians {
    let s = sin_altitude(h, phi, dec);
    match model {
        AltitudeModel::Geometric => Radians(s.asin()),
        AltitudeModel::LegacySine => Radians(s.sin()),
    }
}

/// Outcome of inverting the altitude formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HourAngle {
    /// The sun crosses the altitude this far either side of transit.
    Crosses(Radians),
    /// Even at lower transit the sun stays above the altitude.
    AlwaysAbove,
    /// Even at upper transit the sun stays below the altitude.
    AlwaysBelow,
    /// The inputs were not real numbers.
    Undefined,
}

impl HourAngle {
    /// The raw `acos` value, NaN for every outcome but `Crosses`.
    pub fn radians(self) -> Radians {
        match self {
            HourAngle::Crosses(w) => w,
            _ => Radians(f64::NAN),
        }
    }

    pub fn crosses(self) -> Option<Radians> {
        match self {
            HourAngle::Crosses(w) => Some(w),
            _ => None,
        }
    }
}

/// Hour angle at which the sun's centre sits at altitude `h`.
///
/// `acos((sin h - sin φ sin δ) / (cos φ cos δ))`. Outside acos' domain
/// the sun never reaches `h`; which side of it the sun stays on is reported
/// instead of a NaN.
pub fn hour_angle_for_altitude(h: Radians, phi: Radians, dec: Radians) -> HourAngle {
    let cos_w = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_w.is_nan() {
        HourAngle::Undefined
    } else if cos_w < -1.0 {
        HourAngle::AlwaysAbove
    } else if cos_w > 1.0 {
        HourAngle::AlwaysBelow
    } else {
        HourAngle::Crosses(Radians(cos_w.acos()))
    }
}
