//! Transit-vs-natal aspect classification.
//!
//! Every transiting/natal planet pair is checked against the five major
//! aspect angles with a 5 degree orb. Slow movers (Saturn, Jupiter, and
//! the nodes) making conjunctions or oppositions are additionally surfaced
//! as human-readable significant transits.

use kundali_base::{ChartSnapshot, Planet, separation};
use serde::Serialize;

/// Aspect orb in degrees.
const ASPECT_ORB: f64 = 5.0;

/// Orb within which an aspect counts as exact.
const EXACT_ORB: f64 = 1.0;

/// The five major aspect angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Exact angle of the aspect in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Opposition => 180.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }
}

/// All aspect kinds in classification order. Conjunction is tried first,
/// so a pair within 5 degrees is a conjunction rather than a wide sextile.
const ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

/// Planets whose transits are slow enough to matter individually.
const SLOW_MOVERS: [Planet; 4] = [Planet::Saturn, Planet::Jupiter, Planet::Rahu, Planet::Ketu];

/// One aspect between a transiting and a natal planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitAspect {
    pub transit_planet: Planet,
    pub natal_planet: Planet,
    pub kind: AspectKind,
    /// Actual angular separation in degrees.
    pub orb: f64,
    /// Within 1 degree of the exact angle.
    pub exact: bool,
}

/// Aspects plus the significant-transit summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitReport {
    pub aspects: Vec<TransitAspect>,
    pub significant: Vec<String>,
}

/// Classify every transiting planet against every natal planet.
pub fn transit_aspects(natal: &ChartSnapshot, transits: &ChartSnapshot) -> TransitReport {
    let mut report = TransitReport::default();

    for transit in &transits.placements {
        for natal_p in &natal.placements {
            let diff = separation(transit.longitude, natal_p.longitude);

            let Some(kind) = ASPECT_KINDS
                .iter()
                .copied()
                .find(|k| (diff - k.angle()).abs() <= ASPECT_ORB)
            else {
                continue;
            };

            let exact = ASPECT_KINDS
                .iter()
                .any(|k| (diff - k.angle()).abs() <= EXACT_ORB);
            report.aspects.push(TransitAspect {
                transit_planet: transit.planet,
                natal_planet: natal_p.planet,
                kind,
                orb: diff,
                exact,
            });

            if SLOW_MOVERS.contains(&transit.planet)
                && matches!(kind, AspectKind::Conjunction | AspectKind::Opposition)
            {
                report.significant.push(format!(
                    "Transiting {} {} natal {} (orb: {:.2}\u{b0})",
                    transit.planet.name(),
                    kind.name(),
                    natal_p.planet.name(),
                    diff
                ));
            }
        }
    }

    report
}
