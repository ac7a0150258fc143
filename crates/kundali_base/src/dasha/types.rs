//! Core types for the Vimshottari timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::nakshatra::Nakshatra;
use crate::planet::Planet;

/// Year length used for all year-to-duration conversions.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total length of one full Vimshottari cycle in years.
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// The 3 hierarchical period levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "mahadasha",
            Self::Antardasha => "antardasha",
            Self::Pratyantardasha => "pratyantardasha",
        }
    }

    /// Next deeper level. Subdivision stops below pratyantardasha.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// One period of the timeline at any level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Planet,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub level: DashaLevel,
    /// Lord of the enclosing period, if this is a sub-period.
    pub parent: Option<Planet>,
}

impl DashaPeriod {
    /// Period length in years (365.25-day years).
    pub fn years(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / (DAYS_PER_YEAR * 86_400_000.0)
    }

    /// Closed-interval membership: both boundary instants belong to the
    /// period. At a shared boundary the chronologically earlier period
    /// wins the lookup scan.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

/// Birth balance: the starting lord and its remaining weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaBalance {
    /// The Moon's nakshatra at birth.
    pub nakshatra: Nakshatra,
    /// Ruling planet of that nakshatra; the first mahadasha lord.
    pub lord: Planet,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Years remaining of the starting lord's mahadasha.
    pub balance_years: f64,
}

/// The periods containing a queried instant, one per level.
///
/// A level may be `None` when floating-point overshoot leaves the instant
/// in a boundary gap; that is a normal, non-error outcome.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActiveDashas {
    pub mahadasha: Option<DashaPeriod>,
    pub antardasha: Option<DashaPeriod>,
    pub pratyantardasha: Option<DashaPeriod>,
}
