//! Ashtakavarga (benefic point) scoring.
//!
//! For each of the 7 classical planets, every classical planet present in
//! the chart (the target included) contributes one point to each house at a
//! fixed set of offsets from the contributor's own house. The combined
//! Sarvashtakavarga is the component-wise sum of the 7 vectors.
//!
//! Point totals are position-independent: each contributor always hands out
//! its full offset count. With all 7 planets present the per-planet totals
//! are Sun 42, Moon 45, Mars 36, Mercury 47, Jupiter 47, Venus 44,
//! Saturn 33 (grand total 294).

use serde::Serialize;

use crate::chart::{ChartSnapshot, house_from};
use crate::planet::CLASSICAL_PLANETS;

/// Build a bitmask from 1-based offset values. Bit i is set when offset i
/// receives a point.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// POINTS[target][contributor] = bitmask of favorable 1-based offsets,
/// counted from the contributor's house (1 = the contributor's own house).
///
/// target/contributor indices: 0=Sun, 1=Moon, 2=Mars, 3=Mercury,
/// 4=Jupiter, 5=Venus, 6=Saturn.
const POINTS: [[u16; 7]; 7] = [
    // Sun (total 42)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[3, 6, 10, 11]),             // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 9, 11]),              // from Jupiter
        bits(&[6, 7, 12]),                 // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Saturn
    ],
    // Moon (total 45)
    [
        bits(&[3, 6, 7, 8, 10, 11]),
        bits(&[1, 3, 6, 7, 10, 11]),
        bits(&[2, 3, 5, 6, 9, 10, 11]),
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),
        bits(&[1, 4, 7, 8, 10, 11, 12]),
        bits(&[3, 4, 5, 7, 9, 10, 11]),
        bits(&[3, 5, 6, 11]),
    ],
    // Mars (total 36)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 5, 6, 11]),
        bits(&[6, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 4, 7, 8, 9, 10, 11]),
    ],
    // Mercury (total 47)
    [
        bits(&[5, 6, 9, 11, 12]),
        bits(&[2, 4, 6, 8, 10, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),
        bits(&[6, 8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),
    ],
    // Jupiter (total 47)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),
        bits(&[2, 5, 7, 9, 11]),
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),
        bits(&[2, 5, 6, 9, 10, 11]),
        bits(&[3, 5, 6, 12]),
    ],
    // Venus (total 44)
    [
        bits(&[8, 11, 12]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 6, 9, 11, 12]),
        bits(&[3, 5, 6, 9, 11]),
        bits(&[5, 8, 9, 10, 11]),
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),
        bits(&[3, 4, 5, 8, 9, 10, 11]),
    ],
    // Saturn (total 33)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),
        bits(&[3, 6, 11]),
        bits(&[3, 5, 6, 10, 11, 12]),
        bits(&[6, 8, 9, 10, 11, 12]),
        bits(&[5, 6, 11, 12]),
        bits(&[6, 11, 12]),
        bits(&[3, 5, 6, 11]),
    ],
];

/// Label used for the combined pseudo-planet entry.
pub const SARVASHTAKAVARGA: &str = "Sarvashtakavarga";

/// Point vector for one planet (or the combined entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AshtakavargaScore {
    /// Planet name, or [`SARVASHTAKAVARGA`] for the combined entry.
    pub planet: &'static str,
    /// Points per house, index 0 = house 1.
    pub house_scores: [u16; 12],
    /// Sum of the 12 entries.
    pub total: u16,
}

/// Score a single target planet against the chart.
///
/// Contributors absent from the chart are skipped, not zero-filled.
fn score_planet(target_index: usize, chart: &ChartSnapshot) -> [u16; 12] {
    let mut house_scores = [0u16; 12];
    let rules = &POINTS[target_index];

    for (ci, &contributor) in CLASSICAL_PLANETS.iter().enumerate() {
        let Some(placement) = chart.placement(contributor) else {
            continue;
        };
        let mask = rules[ci];
        for offset in 1..=12u8 {
            if (mask >> offset) & 1 == 1 {
                let target_house = house_from(placement.house, offset - 1);
                house_scores[(target_house - 1) as usize] += 1;
            }
        }
    }

    house_scores
}

/// Compute the 7 per-planet vectors plus the Sarvashtakavarga aggregate.
///
/// A target planet absent from the chart is omitted entirely. The combined
/// entry is always appended last.
pub fn compute_ashtakavarga(chart: &ChartSnapshot) -> Vec<AshtakavargaScore> {
    let mut results: Vec<AshtakavargaScore> = Vec::with_capacity(8);

    for (ti, &target) in CLASSICAL_PLANETS.iter().enumerate() {
        if chart.placement(target).is_none() {
            continue;
        }
        let house_scores = score_planet(ti, chart);
        results.push(AshtakavargaScore {
            planet: target.name(),
            house_scores,
            total: house_scores.iter().sum(),
        });
    }

    let mut combined = [0u16; 12];
    for score in &results {
        for (slot, v) in combined.iter_mut().zip(score.house_scores.iter()) {
            *slot += v;
        }
    }
    results.push(AshtakavargaScore {
        planet: SARVASHTAKAVARGA,
        house_scores: combined,
        total: combined.iter().sum(),
    });

    results
}
