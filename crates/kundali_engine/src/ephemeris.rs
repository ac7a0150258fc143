//! The ephemeris collaborator contract.
//!
//! The engine never computes positions itself. A provider hands back, for a
//! given JD-UT instant, the sidereal longitude/latitude/speed of the 7
//! physically modeled bodies plus the mean lunar node for Rahu, and the
//! sidereal ascendant for an instant and location. Ketu is never requested:
//! it is derived from Rahu here, as the exact opposite point with negated
//! latitude and speed, always retrograde.

use kundali_base::{CLASSICAL_PLANETS, Planet, normalize_360};

use crate::error::EngineError;

/// Raw sidereal state of one body as returned by the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Sidereal ecliptic longitude, degrees. Must be in [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    pub latitude: f64,
    /// Signed speed, degrees/day.
    pub speed: f64,
}

/// Synchronous position provider. Invoked once per request, before any
/// derivation begins; a failure aborts the whole request.
pub trait EphemerisSource {
    /// Sidereal state of a modeled body at `jd_ut`. Rahu is the mean node.
    /// Never called for Ketu.
    fn body_state(&self, body: Planet, jd_ut: f64) -> Result<BodyState, EngineError>;

    /// Sidereal ascendant for the instant and geographic location: the
    /// tropical Placidus ascendant corrected by the Lahiri ayanamsha.
    fn ascendant(&self, jd_ut: f64, latitude: f64, longitude: f64) -> Result<f64, EngineError>;
}

/// Position of one body together with its retrograde flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub planet: Planet,
    pub state: BodyState,
    pub retrograde: bool,
}

/// Reject provider output with an out-of-range longitude.
fn validate_state(planet: Planet, state: &BodyState) -> Result<(), EngineError> {
    if !(0.0..360.0).contains(&state.longitude) || !state.longitude.is_finite() {
        return Err(EngineError::UpstreamEphemeris(format!(
            "longitude {} for {} outside [0, 360)",
            state.longitude,
            planet.name()
        )));
    }
    Ok(())
}

/// Retrograde policy: the luminaries never, the nodes always, everything
/// else when its speed is negative.
fn is_retrograde(planet: Planet, speed: f64) -> bool {
    match planet {
        Planet::Sun | Planet::Moon => false,
        Planet::Rahu | Planet::Ketu => true,
        _ => speed < 0.0,
    }
}

/// Derive Ketu from Rahu: opposite longitude, negated latitude and speed.
pub fn derive_ketu(rahu: &BodyState) -> BodyState {
    BodyState {
        longitude: normalize_360(rahu.longitude + 180.0),
        latitude: -rahu.latitude,
        speed: -rahu.speed,
    }
}

/// Fetch all 9 body positions for an instant: the 7 classical planets and
/// Rahu from the provider, Ketu by derivation. Output is in canonical
/// planet order.
pub fn fetch_positions(
    source: &dyn EphemerisSource,
    jd_ut: f64,
) -> Result<Vec<BodyPosition>, EngineError> {
    let mut positions = Vec::with_capacity(9);

    for planet in CLASSICAL_PLANETS {
        let state = source.body_state(planet, jd_ut)?;
        validate_state(planet, &state)?;
        positions.push(BodyPosition {
            planet,
            state,
            retrograde: is_retrograde(planet, state.speed),
        });
    }

    let rahu = source.body_state(Planet::Rahu, jd_ut)?;
    validate_state(Planet::Rahu, &rahu)?;
    positions.push(BodyPosition {
        planet: Planet::Rahu,
        state: rahu,
        retrograde: true,
    });
    positions.push(BodyPosition {
        planet: Planet::Ketu,
        state: derive_ketu(&rahu),
        retrograde: true,
    });

    Ok(positions)
}
