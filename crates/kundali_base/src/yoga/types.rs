//! Yoga match records.

use serde::Serialize;

use crate::planet::Planet;

/// Strength grade of a detected yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    Exceptional,
}

/// Classification tag for a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaCategory {
    Raj,
    Dhana,
    PanchaMahapurusha,
    ViparitaRaj,
    Knowledge,
    Power,
    Fame,
    Arishta,
}

/// One detected configuration pattern. Immutable; produced fresh per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaMatch {
    pub name: &'static str,
    pub category: YogaCategory,
    pub description: String,
    pub strength: Strength,
    /// Planets forming the pattern.
    pub planets: Vec<Planet>,
    /// Houses the pattern touches.
    pub houses: Vec<u8>,
    /// Classical text the rule is attributed to.
    pub classical_source: &'static str,
    /// False for afflicting patterns.
    pub benefic: bool,
}
