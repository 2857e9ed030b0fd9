use chrono::{DateTime, Utc};
use core::f64::consts::PI;
use thiserror::Error;

use crate::math::{normalize_radians_2pi, Degrees, Radians};

/// Position of the sun on the celestial sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunCoordinates {
    pub declination: Radians,
    pub right_ascension: Radians,
}

/// Solar position in local horizontal coordinates.
///
/// # Fields
///
/// - `azimuth`: radians measured from south, positive towards west, in (-π, π]
/// - `altitude`: radians above the horizon, in [-π/2, π/2] (negative below it)
///
/// Both are NaN when the position is undefined for the given inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalPosition {
    /// Azimuth in radians, 0 = south, π/2 = west
    pub azimuth: Radians,
    /// Altitude in radians, 0 = horizon
    pub altitude: Radians,
}

impl HorizontalPosition {
    /// Compass bearing clockwise from north, in [0, 2π).
    pub fn azimuth_from_north(&self) -> Radians {
        normalize_radians_2pi(Radians(self.azimuth.value() + PI))
    }

    /// Zenith angle (π/2 - altitude).
    pub fn zenith(&self) -> Radians {
        Radians(PI / 2.0 - self.altitude.value())
    }

    pub fn is_defined(&self) -> bool {
        !self.azimuth.is_nan() && !self.altitude.is_nan()
    }
}

/// One row of a threshold table: the sun altitude and the names of the two
/// events it produces.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunAngle {
    /// Target altitude of the sun's centre
    pub angle: Degrees,
    /// Name of the morning crossing
    pub rise_name: &'static str,
    /// Name of the evening crossing
    pub set_name: &'static str,
}

impl SunAngle {
    pub const fn new(angle: f64, rise_name: &'static str, set_name: &'static str) -> Self {
        Self {
            angle: Degrees::new(angle),
            rise_name,
            set_name,
        }
    }
}

/// What kind of crossing produced an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EventKind {
    /// Upper transit of the meridian
    SolarNoon,
    /// Lower transit, half a day before solar noon
    Nadir,
    /// Sun climbs through the threshold altitude
    Rising,
    /// Sun sinks through the threshold altitude
    Setting,
}

/// Result of a solar event calculation (sunrise, sunset, twilight, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", tag = "status", content = "time"))]
pub enum SolarEventResult {
    /// Event occurs at the given instant
    Occurs(DateTime<Utc>),
    /// Sun stays above the threshold all day (e.g., midnight sun)
    AllDay,
    /// Sun stays below the threshold all day (e.g., polar night)
    AllNight,
    /// Inputs produced no real solution (NaN coordinates, or an instant
    /// chrono cannot represent)
    Undefined,
}

impl SolarEventResult {
    /// Extracts the instant from a solar event result.
    ///
    /// # Returns
    ///
    /// - `Some(instant)` if the event occurs
    /// - `None` for every "not observed" outcome
    pub fn time(self) -> Option<DateTime<Utc>> {
        match self {
            SolarEventResult::Occurs(t) => Some(t),
            _ => None,
        }
    }

    pub fn occurs(self) -> bool {
        matches!(self, SolarEventResult::Occurs(_))
    }
}

/// A named solar event for one day and one location.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SunTimeEvent {
    pub name: &'static str,
    pub kind: EventKind,
    /// Threshold altitude; `None` for solar noon and nadir
    pub angle: Option<Degrees>,
    /// Julian Day of the crossing when one exists
    pub julian_day: Option<f64>,
    pub result: SolarEventResult,
}

impl SunTimeEvent {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.result.time()
    }
}

/// Errors returned by the validating parts of the API.
///
/// The free functions [`sun_position`](crate::sun_position) and
/// [`sun_times`](crate::sun_times) never fail; these only come from
/// [`Observer::new`](crate::Observer::new), custom threshold tables and time
/// conversion.
///
/// # Variants
///
/// - `LatitudeOutOfRange`: latitude must be finite and within [-90°, 90°]
/// - `LongitudeOutOfRange`: longitude must be finite and within [-180°, 180°]
/// - `TimeConversionError`: a Julian Day has no representable instant
/// - `DuplicateEventName`: an event name appears twice in a threshold table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunCalcError {
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    #[error("Time conversion error")]
    TimeConversionError,

    #[error("Duplicate event name: {0}")]
    DuplicateEventName(&'static str),
}
