//! Yoga rule engine: a fixed, ordered registry of independent pattern
//! rules evaluated against one chart snapshot.
//!
//! Every rule is a pure function of the snapshot; evaluation order is fixed
//! and equals the order of matches in the output, so two runs over the same
//! snapshot produce identical ordered lists. The only per-run state is the
//! dusthana-combination set consumed by the Viparita Raja rule, threaded
//! explicitly so the engine stays reentrant.

pub mod rules;
pub mod types;

use std::collections::HashSet;

use crate::chart::ChartSnapshot;
use crate::planet::Planet;

pub use types::{Strength, YogaCategory, YogaMatch};

/// State scoped to a single detection run. Created fresh by
/// [`detect_yogas`] and never shared or retained across calls.
#[derive(Debug, Default)]
pub struct RunState {
    /// Lord combinations already reported by the Viparita Raja rule,
    /// keyed by the sorted, deduplicated lord set.
    pub seen_dusthana_combos: HashSet<Vec<Planet>>,
}

/// A detection rule: reads the snapshot, may consult run state, and emits
/// zero or more matches.
pub type Rule = fn(&ChartSnapshot, &mut RunState) -> Vec<YogaMatch>;

/// The registry. Order is the contract: matches appear in the output in
/// registry order.
pub const RULES: [Rule; 31] = [
    rules::gaja_kesari,
    rules::dharma_karmadhipati,
    rules::dhana,
    rules::ruchaka,
    rules::bhadra,
    rules::hamsa,
    rules::malavya,
    rules::sasa,
    rules::viparita_raja,
    rules::lakshmi,
    rules::kubera,
    rules::budha_aditya,
    rules::saraswati,
    rules::chandra_mangala,
    rules::guru_mangala,
    rules::amala,
    rules::chamara,
    rules::adhi,
    rules::kahala,
    rules::vasumathi,
    rules::parvata,
    rules::neecha_bhanga,
    rules::parijata,
    rules::kala_sarpa,
    rules::grahan,
    rules::srik,
    rules::voshi,
    rules::ubhayachari,
    rules::harsha,
    rules::sarala,
    rules::vimala,
];

/// Run every rule against the snapshot, in registry order.
pub fn detect_yogas(chart: &ChartSnapshot) -> Vec<YogaMatch> {
    let mut state = RunState::default();
    let mut matches = Vec::new();
    for rule in RULES {
        matches.extend(rule(chart, &mut state));
    }
    matches
}
