//! Vimshottari dasha: birth balance, 120-year timeline generation, lazy
//! subdivision, and period lookup.
//!
//! The timeline is self-similar across its 3 levels: each period's nine
//! children cycle the fixed 9-lord order starting at the period's own lord,
//! with lengths proportional to the lords' year weights.

pub mod balance;
pub mod timeline;
pub mod types;

pub use balance::birth_balance;
pub use timeline::{find_active, mahadasha_sequence, periods_at, sub_periods};
pub use types::{
    ActiveDashas, DAYS_PER_YEAR, DashaBalance, DashaLevel, DashaPeriod, TOTAL_CYCLE_YEARS,
};
