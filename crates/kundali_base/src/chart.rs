//! Chart snapshot: whole-sign houses, per-planet placements, and the
//! angular primitives shared by the yoga rules and the scorer.
//!
//! Houses are a whole-sign cyclic partition: house N holds the sign N-1
//! positions forward from the ascendant's sign. Everything in a snapshot is
//! computed once at assembly and never mutated.

use serde::{Deserialize, Serialize};

use crate::dignity::{Dignity, dignity_of};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::planet::Planet;
use crate::sign::{ALL_SIGNS, Sign, sign_from_longitude, sign_lord};
use crate::util::separation;

/// Kendra (angular) houses.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trikona (trine) houses.
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];

/// Dusthana (adverse) houses.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

/// Upachaya (growth) houses.
pub const UPACHAYA_HOUSES: [u8; 4] = [3, 6, 10, 11];

/// Default conjunction orb in degrees.
pub const CONJUNCTION_ORB: f64 = 10.0;

/// Whole-sign house of a body for a given ascendant.
///
/// house = ((signIndex(body) - signIndex(asc)) mod 12) + 1, always in [1, 12].
pub fn house_of(body_lon_deg: f64, ascendant_lon_deg: f64) -> u8 {
    let body_sign = sign_from_longitude(body_lon_deg).sign_index as i16;
    let asc_sign = sign_from_longitude(ascendant_lon_deg).sign_index as i16;
    (((body_sign - asc_sign).rem_euclid(12)) + 1) as u8
}

/// The house `offset` positions from `base`, both 1-indexed:
/// ((base - 1 + offset) mod 12) + 1.
///
/// This is the single "Nth house from X" primitive; the yoga rules and the
/// Ashtakavarga scorer both route through it.
pub fn house_from(base: u8, offset: u8) -> u8 {
    (((base as u16 - 1 + offset as u16) % 12) + 1) as u8
}

/// True when two longitudes are within `orb` degrees of each other,
/// measured the short way around the circle.
pub fn conjunct(lon_a: f64, lon_b: f64, orb: f64) -> bool {
    separation(lon_a, lon_b) <= orb
}

/// Fully derived position of one planet within a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub planet: Planet,
    /// Sidereal longitude [0, 360).
    pub longitude: f64,
    pub latitude: f64,
    /// Signed speed in degrees/day.
    pub speed: f64,
    pub retrograde: bool,
    pub sign: Sign,
    pub sign_lord: Planet,
    pub degree_in_sign: f64,
    /// Whole-sign house, 1-12.
    pub house: u8,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Planet,
    /// Pada 1-4.
    pub pada: u8,
    pub dignity: Dignity,
}

impl Placement {
    /// Derive the full placement of a planet from its raw state and the
    /// chart's ascendant longitude.
    pub fn derive(
        planet: Planet,
        longitude: f64,
        latitude: f64,
        speed: f64,
        retrograde: bool,
        ascendant_lon_deg: f64,
    ) -> Self {
        let sign_info = sign_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            planet,
            longitude,
            latitude,
            speed,
            retrograde,
            sign: sign_info.sign,
            sign_lord: sign_lord(sign_info.sign),
            degree_in_sign: sign_info.degree_in_sign,
            house: house_of(longitude, ascendant_lon_deg),
            nakshatra: nak.nakshatra,
            nakshatra_lord: nak.lord,
            pada: nak.pada,
            dignity: dignity_of(planet, longitude),
        }
    }
}

/// One house of the whole-sign partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseAssignment {
    /// House number, 1-12.
    pub number: u8,
    pub sign: Sign,
    pub lord: Planet,
    /// Planets occupying this house, in placement order.
    pub occupants: Vec<Planet>,
}

/// Immutable derived chart: ascendant, 12 houses, and per-planet placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    /// Sidereal ascendant longitude [0, 360).
    pub ascendant: f64,
    pub ascendant_sign: Sign,
    pub houses: Vec<HouseAssignment>,
    pub placements: Vec<Placement>,
}

impl ChartSnapshot {
    /// Assemble a snapshot from an ascendant longitude and derived
    /// placements. Houses follow the ascendant's sign cyclically; occupants
    /// are recorded in placement order.
    pub fn assemble(ascendant: f64, placements: Vec<Placement>) -> Self {
        let asc_sign_index = sign_from_longitude(ascendant).sign_index;
        let houses = (0..12u8)
            .map(|i| {
                let number = i + 1;
                let sign = ALL_SIGNS[((asc_sign_index + i) % 12) as usize];
                let occupants = placements
                    .iter()
                    .filter(|p| p.house == number)
                    .map(|p| p.planet)
                    .collect();
                HouseAssignment {
                    number,
                    sign,
                    lord: sign_lord(sign),
                    occupants,
                }
            })
            .collect();

        Self {
            ascendant,
            ascendant_sign: ALL_SIGNS[asc_sign_index as usize],
            houses,
            placements,
        }
    }

    /// Placement of a planet, if present in the chart.
    pub fn placement(&self, planet: Planet) -> Option<&Placement> {
        self.placements.iter().find(|p| p.planet == planet)
    }

    /// House of a planet, if present.
    pub fn house_of_planet(&self, planet: Planet) -> Option<u8> {
        self.placement(planet).map(|p| p.house)
    }

    /// Lord of a house (1-12).
    pub fn house_lord(&self, number: u8) -> Option<Planet> {
        self.houses
            .iter()
            .find(|h| h.number == number)
            .map(|h| h.lord)
    }

    /// True when both planets are present and within `orb` degrees.
    pub fn planets_conjunct(&self, a: Planet, b: Planet, orb: f64) -> bool {
        match (self.placement(a), self.placement(b)) {
            (Some(pa), Some(pb)) => conjunct(pa.longitude, pb.longitude, orb),
            _ => false,
        }
    }
}
