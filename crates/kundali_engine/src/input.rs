//! Request inputs: birth details, coordinate validation, timezone
//! resolution, and Julian-day conversion.
//!
//! The timezone is a fixed UTC offset such as `+05:30`; it is used only to
//! resolve the local wall-clock instant to UTC before the ephemeris lookup.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Unix epoch expressed as a Julian day.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Birth (or transit reference) details as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    /// Local wall-clock date and time.
    pub birth_time: NaiveDateTime,
    /// Geographic latitude, degrees, [-90, 90].
    pub latitude: f64,
    /// Geographic longitude, degrees, [-180, 180].
    pub longitude: f64,
    /// UTC offset of the location, e.g. "+05:30", "-07:00", or "Z".
    pub timezone: String,
}

impl BirthDetails {
    /// Validate coordinates and timezone.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(EngineError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(EngineError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        parse_utc_offset(&self.timezone)?;
        Ok(())
    }

    /// Resolve the local wall-clock instant to UTC.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, EngineError> {
        let offset = parse_utc_offset(&self.timezone)?;
        let utc_naive = self.birth_time - offset;
        Ok(DateTime::from_naive_utc_and_offset(utc_naive, Utc))
    }
}

/// Parse a fixed UTC offset: `Z`, `+HH:MM`, or `-HH:MM`.
pub fn parse_utc_offset(s: &str) -> Result<Duration, EngineError> {
    let bad = || EngineError::InvalidInput(format!("timezone {s:?} is not Z or +/-HH:MM"));

    if s == "Z" || s == "UTC" {
        return Ok(Duration::zero());
    }

    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1i64, rest),
        Some(("-", rest)) => (-1i64, rest),
        _ => return Err(bad()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(bad)?;
    let hours: i64 = hours.parse().map_err(|_| bad())?;
    let minutes: i64 = minutes.parse().map_err(|_| bad())?;
    if !(0..=14).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(bad());
    }
    Ok(Duration::minutes(sign * (hours * 60 + minutes)))
}

/// Julian day (UT) of a UTC instant.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    let millis = at.timestamp_millis() as f64;
    UNIX_EPOCH_JD + millis / 86_400_000.0
}
