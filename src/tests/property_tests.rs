//! Invariants that must hold for every instant and location.

use chrono::{DateTime, Utc};
use core::f64::consts::PI;
use proptest::prelude::*;

use crate::time::{from_julian_day, to_julian_day};
use crate::{sun_position, sun_times, sun_times_with, EventKind, SunAngle, SUN_ANGLES};

/// Roughly years 1653 to 2286.
fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-10_000_000_000i64..=10_000_000_000i64).prop_filter_map("representable", |s| DateTime::<Utc>::from_timestamp(s, 0))
}

fn custom_table() -> impl Strategy<Value = std::vec::Vec<SunAngle>> {
    const NAMES: [(&str, &str); 8] = [
        ("a0", "b0"),
        ("a1", "b1"),
        ("a2", "b2"),
        ("a3", "b3"),
        ("a4", "b4"),
        ("a5", "b5"),
        ("a6", "b6"),
        ("a7", "b7"),
    ];
    proptest::collection::vec(-30.0f64..=30.0, 0..=NAMES.len()).prop_map(|angles| {
        angles
            .into_iter()
            .zip(NAMES)
            .map(|(angle, (rise, set))| SunAngle::new(angle, rise, set))
            .collect()
    })
}

proptest! {
    #[test]
    fn julian_day_round_trip_within_a_second(instant in any_instant()) {
        let back = from_julian_day(to_julian_day(&instant)).unwrap();
        prop_assert!((back - instant).num_seconds().abs() <= 1, "{} -> {}", instant, back);
    }

    #[test]
    fn position_stays_in_angle_ranges(
        instant in any_instant(),
        latitude in -90.0_f64..=90.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let pos = sun_position(&instant, latitude, longitude);
        if !pos.altitude.is_nan() {
            prop_assert!((-PI / 2.0..=PI / 2.0).contains(&pos.altitude.value()), "{:?}", pos);
        }
        if !pos.azimuth.is_nan() {
            prop_assert!(pos.azimuth.value() > -PI && pos.azimuth.value() <= PI, "{:?}", pos);
            let bearing = pos.azimuth_from_north().value();
            prop_assert!((0.0..2.0 * PI).contains(&bearing), "{:?}", pos);
        }
    }

    #[test]
    fn rise_and_set_mirror_solar_noon(
        instant in any_instant(),
        latitude in -89.0_f64..=89.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let times = sun_times(&instant, latitude, longitude);
        let noon = times.get("solarNoon").and_then(|e| e.julian_day).unwrap();

        for angle in &SUN_ANGLES {
            let rise = times.get(angle.rise_name).unwrap();
            let set = times.get(angle.set_name).unwrap();
            prop_assert_eq!(rise.kind, EventKind::Rising);
            prop_assert_eq!(set.kind, EventKind::Setting);
            // both crossings exist or neither does, for the same reason
            prop_assert_eq!(rise.result.occurs(), set.result.occurs());
            prop_assert_eq!(rise.julian_day.is_some(), set.julian_day.is_some());

            if let (Some(j_rise), Some(j_set)) = (rise.julian_day, set.julian_day) {
                prop_assert!(((noon - j_rise) - (j_set - noon)).abs() < 1e-9);
                prop_assert!(j_rise <= noon && noon <= j_set);
            } else {
                prop_assert_eq!(rise.result, set.result);
            }
        }
    }

    #[test]
    fn nadir_is_half_a_day_before_noon(
        instant in any_instant(),
        latitude in -90.0_f64..=90.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let times = sun_times(&instant, latitude, longitude);
        let noon = times.get("solarNoon").and_then(|e| e.julian_day).unwrap();
        let nadir = times.get("nadir").and_then(|e| e.julian_day).unwrap();
        prop_assert_eq!(noon - 0.5, nadir);

        let span = (times.solar_noon().unwrap() - times.nadir().unwrap()).num_seconds();
        prop_assert!((43_199..=43_201).contains(&span));
    }

    #[test]
    fn solar_noon_is_near_the_requested_instant(
        instant in any_instant(),
        latitude in -90.0_f64..=90.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let noon = sun_times(&instant, latitude, longitude).solar_noon().unwrap();
        // the julian cycle picks the transit nearest the instant
        prop_assert!((noon - instant).num_hours().abs() <= 13, "{} vs {}", instant, noon);
    }

    #[test]
    fn every_table_row_produces_two_unique_events(
        instant in any_instant(),
        latitude in -90.0_f64..=90.0_f64,
        longitude in -180.0_f64..=180.0_f64,
        table in custom_table(),
    ) {
        prop_assert_eq!(sun_times(&instant, latitude, longitude).len(), 2 * SUN_ANGLES.len() + 2);

        let times = sun_times_with(&instant, latitude, longitude, &table).unwrap();
        prop_assert_eq!(times.len(), 2 * table.len() + 2);
        for row in &table {
            prop_assert!(times.get(row.rise_name).is_some());
            prop_assert!(times.get(row.set_name).is_some());
        }
    }
}
