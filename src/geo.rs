//! Geocentric position of the sun.
//!
//! A low-precision orbital model: mean anomaly, a three-term equation of
//! centre, and a fixed obliquity. Good to a fraction of a degree over a few
//! centuries around J2000.0, which is plenty for sunrise tables.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use core::f64::consts::PI;

use crate::math::{Degrees, Radians};
use crate::types::SunCoordinates;

// ============================================================================
// Constants
// ============================================================================

/// Mean anomaly of the sun at J2000.0 (degrees)
const MEAN_ANOMALY_AT_EPOCH: f64 = 357.5291;

/// Mean daily motion of the sun (degrees per day)
const MEAN_ANOMALY_RATE: f64 = 0.985_600_28;

/// Longitude of Earth's perihelion (degrees)
const PERIHELION: f64 = 102.9372;

/// Obliquity of the ecliptic (degrees)
const OBLIQUITY: f64 = 23.4397;

// ============================================================================
// Orbital position
// ============================================================================

/// Mean anomaly `M` for `days` since J2000.0.
pub fn solar_mean_anomaly(days: f64) -> Radians {
    Degrees(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * days).to_radians()
}

/// Equation of centre: true anomaly minus mean anomaly.
fn equation_of_center(mean_anomaly: Radians) -> Radians {
    let m = mean_anomaly.value();
    Degrees(1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians()
}

/// Ecliptic longitude of the sun as seen from Earth.
///
/// The trailing `+ π` turns the heliocentric longitude of Earth into the
/// geocentric longitude of the sun.
pub fn ecliptic_longitude(mean_anomaly: Radians) -> Radians {
    let center = equation_of_center(mean_anomaly);
    let perihelion = Degrees(PERIHELION).to_radians();
    mean_anomaly + center + perihelion + Radians(PI)
}

// ============================================================================
// Ecliptic to equatorial
// ============================================================================

fn obliquity() -> Radians {
    Degrees(OBLIQUITY).to_radians()
}

/// Declination for ecliptic longitude `l` and latitude `b`.
pub fn declination(l: Radians, b: Radians) -> Radians {
    let e = obliquity();
    Radians((b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin())
}

/// Right ascension for ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: Radians, b: Radians) -> Radians {
    let e = obliquity();
    Radians((l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos()))
}

/// Equatorial coordinates of the sun `days` after J2000.0.
///
/// The sun's ecliptic latitude never exceeds a few arcseconds and is taken
/// as zero.
pub fn sun_coordinates(days: f64) -> SunCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(days));
    SunCoordinates {
        declination: declination(l, Radians(0.0)),
        right_ascension: right_ascension(l, Radians(0.0)),
    }
}
