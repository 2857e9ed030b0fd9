//! Print the sun's position and today's solar events for a location.
//!
//! ```text
//! suncalc --latitude 50.5 --longitude 30.5 --timezone Europe/Kyiv
//! SUNCALC_LATITUDE=-33.9 SUNCALC_LONGITUDE=151.2 suncalc --format json
//! ```
use std::error::Error;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use serde::Serialize;

use suncalc::{AltitudeModel, HorizontalPosition, Observer, SolarEventResult, SunTimes};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Sun position and sunrise, sunset and twilight times")]
struct Args {
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, value_parser = parse_f64, env = "SUNCALC_LATITUDE")]
    latitude: f64,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, value_parser = parse_f64, env = "SUNCALC_LONGITUDE")]
    longitude: f64,

    /// Instant to evaluate, RFC 3339 (e.g. "2013-03-05T00:00:00Z"). Defaults to now.
    #[arg(long, value_parser = parse_time)]
    time: Option<DateTime<Utc>>,

    /// IANA time zone used to display event times
    #[arg(long, value_parser = parse_timezone, default_value = "UTC")]
    timezone: Tz,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Use sin() instead of asin() for altitude, matching older suncalc ports
    #[arg(long)]
    legacy_altitude: bool,
}

fn parse_f64(s: &str) -> Result<f64, String> {
    s.parse().map_err(|_| format!("Invalid number: {}", s))
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.to_utc())
        .map_err(|e| format!("Invalid RFC 3339 time '{}': {}", s, e))
}

fn parse_timezone(s: &str) -> Result<Tz, String> {
    s.parse().map_err(|_| format!("Unknown time zone: {}", s))
}

#[derive(Serialize)]
struct Report<'a> {
    observer: Observer,
    time: DateTime<Utc>,
    altitude_model: AltitudeModel,
    position: PositionReport,
    events: &'a SunTimes,
}

#[derive(Serialize)]
struct PositionReport {
    azimuth: f64,
    altitude: f64,
    azimuth_deg: f64,
    altitude_deg: f64,
    bearing_deg: f64,
}

impl From<HorizontalPosition> for PositionReport {
    fn from(pos: HorizontalPosition) -> Self {
        Self {
            azimuth: pos.azimuth.value(),
            altitude: pos.altitude.value(),
            azimuth_deg: pos.azimuth.to_degrees().value(),
            altitude_deg: pos.altitude.to_degrees().value(),
            bearing_deg: pos.azimuth_from_north().to_degrees().value(),
        }
    }
}

fn print_text(args: &Args, observer: &Observer, time: &DateTime<Utc>, pos: &HorizontalPosition, times: &SunTimes) {
    let tz = args.timezone;
    println!("Location    : {:.5}, {:.5}", observer.latitude().value(), observer.longitude().value());
    println!("Time        : {}", time.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z"));
    println!("---");
    if pos.is_defined() {
        println!("Altitude    : {:8.3}°", pos.altitude.to_degrees().value());
        println!("Azimuth     : {:8.3}° (from south)", pos.azimuth.to_degrees().value());
        println!("Bearing     : {:8.3}° (from north)", pos.azimuth_from_north().to_degrees().value());
    } else {
        println!("Position undefined for these inputs.");
    }
    println!("---");

    for event in times.chronological() {
        if let Some(t) = event.time() {
            println!("{:<14}: {}", event.name, t.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z"));
        }
    }

    let missing: Vec<_> = times.iter().filter(|e| !e.result.occurs()).collect();
    if !missing.is_empty() {
        println!("---");
        for event in missing {
            let why = match event.result {
                SolarEventResult::AllDay => "sun stays above",
                SolarEventResult::AllNight => "sun stays below",
                _ => "undefined",
            };
            println!("{:<14}: not observed ({})", event.name, why);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let observer = Observer::new(args.latitude, args.longitude)?;
    let time = args.time.unwrap_or_else(Utc::now);
    let model = if args.legacy_altitude {
        AltitudeModel::LegacySine
    } else {
        AltitudeModel::Geometric
    };
    info!("Observer {:?} at {} ({:?})", observer, time, model);

    let pos = observer.position_with(&time, model);
    let times = observer.times(&time);
    debug!("{} events, {} observed", times.len(), times.chronological().len());

    match args.format {
        OutputFormat::Text => print_text(&args, &observer, &time, &pos, &times),
        OutputFormat::Json => {
            let report = Report {
                observer,
                time,
                altitude_model: model,
                position: pos.into(),
                events: &times,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
