use chrono::{DateTime, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use julian_day_converter::unix_millis_to_julian_day;

use crate::types::SunCalcError;

/// Seconds in one day.
pub const DAY_SECONDS: f64 = 86_400.0;

/// Julian Day at 1970-01-01 12:00:00 UTC. Unix midnight sits half a day earlier.
pub const J1970: f64 = 2_440_588.0;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Compute the Julian Day for an instant.
///
/// Only whole Unix seconds take part: the sub-second part of `instant` is
/// dropped before conversion, giving `unix / 86400 - 0.5 + J1970`.
pub fn to_julian_day(instant: &DateTime<Utc>) -> f64 {
    unix_millis_to_julian_day(instant.timestamp().saturating_mul(1000))
}

/// Convert a Julian Day back to an instant, truncated to whole seconds.
///
/// # Errors
///
/// [`SunCalcError::TimeConversionError`] when `julian_day` is NaN, infinite,
/// or outside the range chrono can represent. A missing solar event never
/// turns into a made-up timestamp.
pub fn from_julian_day(julian_day: f64) -> Result<DateTime<Utc>, SunCalcError> {
    if !julian_day.is_finite() {
        return Err(SunCalcError::TimeConversionError);
    }
    let seconds = ((julian_day + 0.5 - J1970) * DAY_SECONDS).trunc();
    // i64 casts saturate; reject anything that would be clamped
    if seconds.abs() >= i64::MAX as f64 {
        return Err(SunCalcError::TimeConversionError);
    }
    DateTime::<Utc>::from_timestamp(seconds as i64, 0).ok_or(SunCalcError::TimeConversionError)
}

/// Fractional days elapsed since J2000.0, the unit every solar formula uses.
pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
    to_julian_day(instant) - J2000
}
