//! # suncalc
//!
//! Sun position and daily solar event times for any place on Earth.
//!
//! The crate answers two questions:
//!
//! - where is the sun (azimuth and altitude) from this place at this instant,
//!   see [`sun_position`];
//! - when does the sun cross each of a set of altitudes today (sunrise,
//!   sunset, the three twilights, golden hour) and when are solar noon and
//!   nadir, see [`sun_times`].
//!
//! It is a compact ephemeris approximation accurate to about a minute for
//! sunrise-type events, not a high precision solar position algorithm. There
//! is no refraction model beyond the threshold angles themselves.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suncalc::{sun_position, sun_times};
//!
//! let t = Utc.with_ymd_and_hms(2012, 6, 22, 12, 0, 0).unwrap();
//!
//! // Angles come back in radians; latitude and longitude go in as degrees
//! let pos = sun_position(&t, 55.0, -3.0);
//! println!("Altitude: {:.2}°", pos.altitude.to_degrees().value());
//! println!("Bearing:  {:.2}°", pos.azimuth_from_north().to_degrees().value());
//!
//! let times = sun_times(&t, 55.0, -3.0);
//! assert_eq!(times.len(), 14);
//! if let Some(sunrise) = times.time("sunrise") {
//!     println!("Sunrise: {sunrise}");
//! }
//! ```
//!
//! ## Validated input
//!
//! The free functions accept any `f64` and let out-of-range coordinates
//! produce NaN or meaningless results. [`Observer`] checks its coordinates
//! once and then offers the same calculations:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suncalc::{Observer, SunCalcError};
//!
//! assert_eq!(Observer::new(91.0, 0.0).unwrap_err(), SunCalcError::LatitudeOutOfRange);
//!
//! let kyiv = Observer::new(50.5, 30.5).unwrap();
//! let times = kyiv.times(&Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap());
//! assert!(times.time("sunrise") < times.solar_noon());
//! ```
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod geo;
pub mod horizontal;
pub mod math;
pub mod sun_times;
pub mod time;
pub mod types;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};

pub use crate::horizontal::{AltitudeModel, HourAngle};
pub use crate::math::{Degrees, Radians};
pub use crate::sun_times::{validate_angles, SunTimes, NADIR, SOLAR_NOON, SUN_ANGLES};
pub use crate::time::{days_since_j2000, from_julian_day, to_julian_day};
pub use crate::types::{
    EventKind, HorizontalPosition, SolarEventResult, SunAngle, SunCalcError, SunCoordinates, SunTimeEvent,
};

use crate::geo::sun_coordinates;
use crate::horizontal::{altitude_with, azimuth, hour_angle};

/// Position of the sun seen from `lat`/`lng` (degrees) at `instant`.
///
/// Out-of-range coordinates are not rejected; use [`Observer`] for that.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::sun_position;
///
/// let t = Utc.with_ymd_and_hms(2012, 6, 22, 12, 0, 0).unwrap();
/// let pos = sun_position(&t, 55.0, -3.0);
/// let alt = pos.altitude.to_degrees().value();
/// assert!(alt > 57.0 && alt < 59.0);
/// ```
pub fn sun_position(instant: &DateTime<Utc>, lat: f64, lng: f64) -> HorizontalPosition {
    sun_position_with(instant, lat, lng, AltitudeModel::Geometric)
}

/// [`sun_position`] with an explicit [`AltitudeModel`].
pub fn sun_position_with(instant: &DateTime<Utc>, lat: f64, lng: f64, model: AltitudeModel) -> HorizontalPosition {
    position(instant, Degrees(lat), Degrees(lng), model)
}

fn position(instant: &DateTime<Utc>, lat: Degrees, lng: Degrees, model: AltitudeModel) -> HorizontalPosition {
    let lw = (-lng).to_radians();
    let phi = lat.to_radians();
    let d = days_since_j2000(instant);

    let c = sun_coordinates(d);
    let h = hour_angle(d, lw, c.right_ascension);

    HorizontalPosition {
        azimuth: azimuth(h, phi, c.declination),
        altitude: altitude_with(h, phi, c.declination, model),
    }
}

/// Solar noon, nadir, and both crossings of every angle in [`SUN_ANGLES`]
/// for the solar day nearest `instant`, seen from `lat`/`lng` (degrees).
///
/// The result always holds `2 * SUN_ANGLES.len() + 2` events. Crossings that
/// do not happen (polar day or night) are present with
/// [`SolarEventResult::AllDay`] or [`SolarEventResult::AllNight`].
pub fn sun_times(instant: &DateTime<Utc>, lat: f64, lng: f64) -> SunTimes {
    sun_times::solve(instant, Degrees(lat), Degrees(lng), &SUN_ANGLES)
}

/// Like [`sun_times`] but for a caller-supplied threshold table.
///
/// # Errors
///
/// [`SunCalcError::DuplicateEventName`] when two rows share an event name or
/// a row reuses `solarNoon` / `nadir`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc::{sun_times_with, SunAngle, SUN_ANGLES};
///
/// let blue_hour = SunAngle::new(-4.0, "blueHourEnd", "blueHour");
/// let mut table = SUN_ANGLES.to_vec();
/// table.push(blue_hour);
///
/// let t = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
/// let times = sun_times_with(&t, 48.85, 2.35, &table).unwrap();
/// assert_eq!(times.len(), 2 * table.len() + 2);
/// assert!(times.time("blueHour") > times.time("sunset"));
/// ```
pub fn sun_times_with(instant: &DateTime<Utc>, lat: f64, lng: f64, angles: &[SunAngle]) -> Result<SunTimes, SunCalcError> {
    validate_angles(angles)?;
    Ok(sun_times::solve(instant, Degrees(lat), Degrees(lng), angles))
}

/// A validated observer location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observer {
    latitude: Degrees,
    longitude: Degrees,
}

impl Observer {
    /// Creates an observer at `lat`/`lng` degrees.
    ///
    /// # Errors
    ///
    /// - [`SunCalcError::LatitudeOutOfRange`] unless `lat` is within [-90, 90]
    /// - [`SunCalcError::LongitudeOutOfRange`] unless `lng` is within [-180, 180]
    ///
    /// NaN fails both range checks.
    pub fn new(lat: f64, lng: f64) -> Result<Self, SunCalcError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(SunCalcError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(SunCalcError::LongitudeOutOfRange);
        }
        Ok(Self {
            latitude: Degrees(lat),
            longitude: Degrees(lng),
        })
    }

    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    pub fn position(&self, instant: &DateTime<Utc>) -> HorizontalPosition {
        position(instant, self.latitude, self.longitude, AltitudeModel::Geometric)
    }

    pub fn position_with(&self, instant: &DateTime<Utc>, model: AltitudeModel) -> HorizontalPosition {
        position(instant, self.latitude, self.longitude, model)
    }

    pub fn times(&self, instant: &DateTime<Utc>) -> SunTimes {
        sun_times::solve(instant, self.latitude, self.longitude, &SUN_ANGLES)
    }

    /// # Errors
    ///
    /// See [`sun_times_with`].
    pub fn times_with(&self, instant: &DateTime<Utc>, angles: &[SunAngle]) -> Result<SunTimes, SunCalcError> {
        validate_angles(angles)?;
        Ok(sun_times::solve(instant, self.latitude, self.longitude, angles))
    }
}
