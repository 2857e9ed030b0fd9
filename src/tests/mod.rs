#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

mod property_tests;

use chrono::{DateTime, TimeZone, Utc};

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec).single().unwrap()
}

fn parse(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().to_utc()
}
