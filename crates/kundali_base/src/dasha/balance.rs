//! Birth balance: how much of the starting lord's mahadasha remains.
//!
//! The Moon's position within its nakshatra fixes both the starting lord
//! (the nakshatra's ruler) and the elapsed fraction of that lord's period.

use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};

use super::types::DashaBalance;

/// Compute the Vimshottari balance at birth from the Moon's sidereal
/// longitude.
///
/// `balance_years = full_years(lord) * (1 - degrees_into_nakshatra / span)`.
pub fn birth_balance(moon_sidereal_lon: f64) -> DashaBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = info.degrees_in_nakshatra / NAKSHATRA_SPAN;
    DashaBalance {
        nakshatra: info.nakshatra,
        lord: info.lord,
        elapsed_fraction,
        balance_years: info.lord.dasha_years() * (1.0 - elapsed_fraction),
    }
}
