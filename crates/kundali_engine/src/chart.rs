//! Chart and timeline assembly: the one place where ephemeris output,
//! input handling, and the pure derivation engines meet.

use chrono::{DateTime, Utc};
use kundali_base::{
    ActiveDashas, ChartSnapshot, DashaBalance, DashaPeriod, Placement, Planet, birth_balance,
    mahadasha_sequence, periods_at,
};
use tracing::debug;

use crate::ephemeris::{EphemerisSource, fetch_positions};
use crate::error::EngineError;
use crate::input::{BirthDetails, julian_day};

/// Validate the request, resolve it to a UTC instant, query the provider
/// once, and assemble the derived snapshot.
///
/// Any provider failure aborts the request; a partial chart is never
/// returned.
pub fn build_chart(
    source: &dyn EphemerisSource,
    details: &BirthDetails,
) -> Result<ChartSnapshot, EngineError> {
    details.validate()?;
    let utc = details.to_utc()?;
    let jd = julian_day(utc);

    let ascendant = source.ascendant(jd, details.latitude, details.longitude)?;
    if !(0.0..360.0).contains(&ascendant) || !ascendant.is_finite() {
        return Err(EngineError::UpstreamEphemeris(format!(
            "ascendant {ascendant} outside [0, 360)"
        )));
    }

    let positions = fetch_positions(source, jd)?;
    let placements: Vec<Placement> = positions
        .iter()
        .map(|bp| {
            Placement::derive(
                bp.planet,
                bp.state.longitude,
                bp.state.latitude,
                bp.state.speed,
                bp.retrograde,
                ascendant,
            )
        })
        .collect();

    debug!(jd, ascendant, bodies = placements.len(), "assembled chart snapshot");
    Ok(ChartSnapshot::assemble(ascendant, placements))
}

/// Full dasha timeline for a birth: balance plus the top-level sequence.
///
/// Only the Moon's longitude is needed, so this queries a single body.
pub fn dasha_timeline(
    source: &dyn EphemerisSource,
    details: &BirthDetails,
) -> Result<(DashaBalance, Vec<DashaPeriod>), EngineError> {
    details.validate()?;
    let utc = details.to_utc()?;
    let jd = julian_day(utc);

    let moon = source.body_state(Planet::Moon, jd)?;
    if !(0.0..360.0).contains(&moon.longitude) {
        return Err(EngineError::UpstreamEphemeris(format!(
            "longitude {} for Moon outside [0, 360)",
            moon.longitude
        )));
    }

    let balance = birth_balance(moon.longitude);
    let sequence = mahadasha_sequence(utc, &balance);
    debug!(
        moon_longitude = moon.longitude,
        lord = balance.lord.name(),
        periods = sequence.len(),
        "generated dasha timeline"
    );
    Ok((balance, sequence))
}

/// The periods containing `at`, for a birth described by `details`.
pub fn dasha_at(
    source: &dyn EphemerisSource,
    details: &BirthDetails,
    at: DateTime<Utc>,
) -> Result<ActiveDashas, EngineError> {
    let (_, sequence) = dasha_timeline(source, details)?;
    Ok(periods_at(&sequence, at))
}
