//! Pure derivation and rule engines for sidereal chart analysis.
//!
//! Four engines over externally supplied positions:
//! - chart derivation: sign, whole-sign house, nakshatra, dignity
//! - Vimshottari dasha timeline generation and lookup
//! - yoga pattern detection against an ordered rule registry
//! - Ashtakavarga benefic-point scoring
//!
//! Everything here is a pure function of its inputs plus const tables
//! frozen at compile time; there is no I/O, no clock access, and no shared
//! mutable state. Ephemeris access and request handling live in
//! `kundali_engine`.

pub mod ashtakavarga;
pub mod chart;
pub mod dasha;
pub mod dignity;
pub mod nakshatra;
pub mod planet;
pub mod sign;
pub mod util;
pub mod yoga;

pub use ashtakavarga::{AshtakavargaScore, SARVASHTAKAVARGA, compute_ashtakavarga};
pub use chart::{
    CONJUNCTION_ORB, ChartSnapshot, DUSTHANA_HOUSES, HouseAssignment, KENDRA_HOUSES, Placement,
    TRIKONA_HOUSES, UPACHAYA_HOUSES, conjunct, house_from, house_of,
};
pub use dasha::{
    ActiveDashas, DAYS_PER_YEAR, DashaBalance, DashaLevel, DashaPeriod, TOTAL_CYCLE_YEARS,
    birth_balance, find_active, mahadasha_sequence, periods_at, sub_periods,
};
pub use dignity::{Dignity, dignity_of};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, VIMSHOTTARI_ORDER,
    nakshatra_from_longitude,
};
pub use planet::{ALL_PLANETS, CLASSICAL_PLANETS, NATURAL_BENEFICS, Planet};
pub use sign::{ALL_SIGNS, Sign, SignInfo, sign_from_longitude, sign_lord};
pub use util::{normalize_360, separation};
pub use yoga::{RULES, RunState, Strength, YogaCategory, YogaMatch, detect_yogas};
