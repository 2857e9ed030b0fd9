//! Daily solar events.
//!
//! Solar noon comes from the approximate transit of the local meridian with
//! a two-term correction for orbital eccentricity and obliquity. Every other
//! event is found by inverting the altitude formula for the threshold's hour
//! angle, which gives the evening crossing; the morning crossing is its
//! mirror image around solar noon.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use chrono::{DateTime, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use core::f64::consts::PI;
use log::{debug, trace};

use crate::geo::{declination, ecliptic_longitude, solar_mean_anomaly};
use crate::horizontal::{hour_angle_for_altitude, HourAngle};
use crate::math::{Degrees, Radians};
use crate::time::{days_since_j2000, from_julian_day, J2000};
use crate::types::{EventKind, SolarEventResult, SunAngle, SunCalcError, SunTimeEvent};

/// Name of the upper transit event.
pub const SOLAR_NOON: &str = "solarNoon";
/// Name of the lower transit event.
pub const NADIR: &str = "nadir";

/// Offset of the transit approximation (days)
const J0: f64 = 0.0009;

/// Default threshold table.
///
/// -0.833° puts the top of the disc on the horizon after standard
/// refraction; -0.3° is the bottom of the disc; -6/-12/-18 are the civil,
/// nautical and astronomical twilight limits; 6° bounds the golden hour.
pub static SUN_ANGLES: [SunAngle; 6] = [
    SunAngle::new(-0.833, "sunrise", "sunset"),
    SunAngle::new(-0.3, "sunriseEnd", "sunsetStart"),
    SunAngle::new(-6.0, "dawn", "dusk"),
    SunAngle::new(-12.0, "nauticalDawn", "nauticalDusk"),
    SunAngle::new(-18.0, "nightEnd", "night"),
    SunAngle::new(6.0, "goldenHourEnd", "goldenHour"),
];

// ============================================================================
// Transit
// ============================================================================

/// Whole number of days from J2000.0 to the local solar noon nearest `days`.
pub fn julian_cycle(days: f64, lw: Radians) -> f64 {
    (days - J0 - lw.value() / (2.0 * PI) + 0.5).floor()
}

/// Approximate days since J2000.0 at which the hour angle equals `ht`.
pub fn approx_transit(ht: Radians, lw: Radians, n: f64) -> f64 {
    J0 + (ht.value() + lw.value()) / (2.0 * PI) + n
}

/// Julian Day of a transit near `ds`, corrected by the equation of time.
pub fn solar_transit_j(ds: f64, m: Radians, l: Radians) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l.value()).sin()
}

/// Solar quantities shared by every event of one day.
#[derive(Copy, Clone, Debug)]
struct SolarDay {
    lw: Radians,
    phi: Radians,
    n: f64,
    m: Radians,
    l: Radians,
    dec: Radians,
    noon: f64,
}

impl SolarDay {
    fn new(instant: &DateTime<Utc>, lat: Degrees, lng: Degrees) -> Self {
        let lw = (-lng).to_radians();
        let phi = lat.to_radians();

        let d = days_since_j2000(instant);
        let n = julian_cycle(d, lw);
        let ds = approx_transit(Radians(0.0), lw, n);

        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m);
        let dec = declination(l, Radians(0.0));
        let noon = solar_transit_j(ds, m, l);
        trace!("solar day: n={n} ds={ds} M={} L={} dec={} noon={noon}", m.value(), l.value(), dec.value());

        Self { lw, phi, n, m, l, dec, noon }
    }

    /// Julian Day of the evening crossing of `h`.
    fn set_j(&self, h: Radians) -> Result<f64, HourAngle> {
        let w = hour_angle_for_altitude(h, self.phi, self.dec);
        let w = w.crosses().ok_or(w)?;
        Ok(solar_transit_j(approx_transit(w, self.lw, self.n), self.m, self.l))
    }
}

fn transit_event(name: &'static str, kind: EventKind, julian_day: f64) -> SunTimeEvent {
    SunTimeEvent {
        name,
        kind,
        angle: None,
        julian_day: Some(julian_day),
        result: occurs_at(julian_day),
    }
}

fn occurs_at(julian_day: f64) -> SolarEventResult {
    match from_julian_day(julian_day) {
        Ok(t) => SolarEventResult::Occurs(t),
        Err(_) => SolarEventResult::Undefined,
    }
}

// ============================================================================
// Result
// ============================================================================

/// Every event of one solar day, keyed by name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SunTimes {
    events: BTreeMap<&'static str, SunTimeEvent>,
}

impl SunTimes {
    pub fn get(&self, name: &str) -> Option<&SunTimeEvent> {
        self.events.get(name)
    }

    /// Instant of the named event, `None` if it does not occur or is unknown.
    pub fn time(&self, name: &str) -> Option<DateTime<Utc>> {
        self.events.get(name).and_then(SunTimeEvent::time)
    }

    pub fn solar_noon(&self) -> Option<DateTime<Utc>> {
        self.time(SOLAR_NOON)
    }

    pub fn nadir(&self) -> Option<DateTime<Utc>> {
        self.time(NADIR)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &SunTimeEvent> {
        self.events.values()
    }

    /// Events that occur, earliest first.
    pub fn chronological(&self) -> Vec<&SunTimeEvent> {
        let mut occurring: Vec<&SunTimeEvent> = self.events.values().filter(|e| e.result.occurs()).collect();
        occurring.sort_by_key(|e| e.time());
        occurring
    }
}

// ============================================================================
// Solver
// ============================================================================

/// Checks that a threshold table keeps every event name unique.
///
/// # Errors
///
/// [`SunCalcError::DuplicateEventName`] if two rows share a name or a row
/// reuses `solarNoon`/`nadir`.
pub fn validate_angles(angles: &[SunAngle]) -> Result<(), SunCalcError> {
    let mut seen = BTreeSet::from([SOLAR_NOON, NADIR]);
    for name in angles.iter().flat_map(|a| [a.rise_name, a.set_name]) {
        if !seen.insert(name) {
            return Err(SunCalcError::DuplicateEventName(name));
        }
    }
    Ok(())
}

/// Solve a threshold table whose names are already known to be unique.
pub(crate) fn solve(instant: &DateTime<Utc>, lat: Degrees, lng: Degrees, angles: &[SunAngle]) -> SunTimes {
    let day = SolarDay::new(instant, lat, lng);
    let mut events = BTreeMap::new();

    for event in [
        transit_event(SOLAR_NOON, EventKind::SolarNoon, day.noon),
        transit_event(NADIR, EventKind::Nadir, day.noon - 0.5),
    ] {
        events.insert(event.name, event);
    }

    for sun_angle in angles {
        let (rise, set) = match day.set_j(sun_angle.angle.to_radians()) {
            Ok(j_set) => {
                let j_rise = day.noon - (j_set - day.noon);
                ((Some(j_rise), occurs_at(j_rise)), (Some(j_set), occurs_at(j_set)))
            }
            Err(outcome) => {
                let result = match outcome {
                    HourAngle::AlwaysAbove => SolarEventResult::AllDay,
                    HourAngle::AlwaysBelow => SolarEventResult::AllNight,
                    _ => SolarEventResult::Undefined,
                };
                debug!(
                    "{}/{} not observed at lat {} on {}: {:?}",
                    sun_angle.rise_name, sun_angle.set_name, lat, instant, result
                );
                ((None, result), (None, result))
            }
        };

        events.insert(
            sun_angle.rise_name,
            SunTimeEvent {
                name: sun_angle.rise_name,
                kind: EventKind::Rising,
                angle: Some(sun_angle.angle),
                julian_day: rise.0,
                result: rise.1,
            },
        );
        events.insert(
            sun_angle.set_name,
            SunTimeEvent {
                name: sun_angle.set_name,
                kind: EventKind::Setting,
                angle: Some(sun_angle.angle),
                julian_day: set.0,
                result: set.1,
            },
        );
    }

    SunTimes { events }
}
