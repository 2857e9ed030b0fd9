//! Today's sun position and events for Lakewood, NJ, shown in local time.
//!
//!   cargo run --example lakewood_nj --features cli
#![allow(missing_docs)]
use chrono::{Timelike, Utc};
use chrono_tz::Tz;
use suncalc::{Observer, SolarEventResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Lakewood, NJ coordinates
    let latitude = 40.070591415768035;
    let longitude: f64 = -74.20516698767808;
    let tz = Tz::America__New_York;

    let now = Utc::now().with_timezone(&tz);
    let local_noon = now
        .with_hour(12)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .ok_or("Invalid local noon")?;
    let dt = local_noon.to_utc();

    let lakewood = Observer::new(latitude, longitude)?;

    println!("Sun Calculator Example - Lakewood, NJ");
    println!("Location: {:.5}°N, {:.5}°W", latitude, longitude.abs());
    println!("Date: {}", local_noon.format("%B %d, %Y"));
    println!("{:=<60}", "");

    let position = lakewood.position(&dt);
    println!("Solar Position (at {}):", local_noon.format("%H:%M:%S %Z"));
    println!("  Altitude: {:.2}°", position.altitude.to_degrees().value());
    println!("  Zenith angle: {:.2}°", position.zenith().to_degrees().value());
    println!("  Bearing from north: {:.2}°", position.azimuth_from_north().to_degrees().value());
    println!();

    let times = lakewood.times(&dt);
    println!("Solar Events:");
    for event in times.chronological() {
        if let Some(t) = event.time() {
            println!("  {:<14} {}", event.name, t.with_timezone(&tz).format("%H:%M:%S"));
        }
    }
    for event in times.iter() {
        match event.result {
            SolarEventResult::AllDay => println!("  {:<14} sun stays above {}°", event.name, angle_of(event.angle)),
            SolarEventResult::AllNight => println!("  {:<14} sun stays below {}°", event.name, angle_of(event.angle)),
            SolarEventResult::Undefined => println!("  {:<14} undefined", event.name),
            SolarEventResult::Occurs(_) => {}
        }
    }

    if let (Some(rise), Some(set)) = (times.time("sunrise"), times.time("sunset")) {
        let daylight = set - rise;
        println!();
        println!(
            "Day length: {}h {:02}m",
            daylight.num_hours(),
            daylight.num_minutes() % 60
        );
    }

    Ok(())
}

fn angle_of(angle: Option<suncalc::Degrees>) -> f64 {
    angle.map_or(f64::NAN, |a| a.value())
}
