//! Request-level orchestration around the pure engines in `kundali_base`.
//!
//! This crate owns the three boundary concerns:
//! - the ephemeris collaborator contract ([`EphemerisSource`]) and the
//!   derived-Ketu / retrograde policies
//! - input validation and local-time-to-UTC resolution
//! - assembly of chart snapshots, dasha timelines, and transit reports
//!
//! The engine is stateless: every call is a pure function of its inputs
//! plus the provider's answers, so concurrent requests need no locking.

pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod input;
pub mod transit;

pub use chart::{build_chart, dasha_at, dasha_timeline};
pub use ephemeris::{BodyPosition, BodyState, EphemerisSource, derive_ketu, fetch_positions};
pub use error::EngineError;
pub use input::{BirthDetails, julian_day, parse_utc_offset};
pub use transit::{AspectKind, TransitAspect, TransitReport, transit_aspects};
