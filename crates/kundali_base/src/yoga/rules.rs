//! The detection rules, in registry order.
//!
//! Each rule reads the snapshot and emits zero or more matches. Several
//! rules scan a fixed candidate order and stop at the first hit; those scan
//! orders are part of the contract and are called out on the rule.

use crate::chart::{
    ChartSnapshot, CONJUNCTION_ORB, DUSTHANA_HOUSES, KENDRA_HOUSES, UPACHAYA_HOUSES, house_from,
};
use crate::dignity::Dignity;
use crate::planet::{CLASSICAL_PLANETS, NATURAL_BENEFICS, Planet};
use crate::sign::Sign;
use crate::util::separation;

use super::types::{Strength, YogaCategory, YogaMatch};
use super::RunState;

/// Kendra and trikona houses merged: 1, 4, 5, 7, 9, 10.
const KENDRA_TRIKONA: [u8; 6] = [1, 4, 5, 7, 9, 10];

/// True when two houses sit in mutual kendras (difference 0, 3, 6, or 9).
fn mutual_kendra(house_a: u8, house_b: u8) -> bool {
    matches!((house_a as i8 - house_b as i8).abs(), 0 | 3 | 6 | 9)
}

/// Lord of a house together with the house that lord occupies, when the
/// lord is placed in the chart.
fn lord_and_house(chart: &ChartSnapshot, house: u8) -> Option<(Planet, u8)> {
    let lord = chart.house_lord(house)?;
    let lord_house = chart.house_of_planet(lord)?;
    Some((lord, lord_house))
}

/// Deduplicate preserving first occurrence, so repeated runs emit
/// byte-identical records.
fn dedup_ordered(planets: Vec<Planet>) -> Vec<Planet> {
    let mut out: Vec<Planet> = Vec::with_capacity(planets.len());
    for p in planets {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Gaja Kesari: Moon and Jupiter in mutual kendras. Strong when they share
/// a house, otherwise moderate.
pub fn gaja_kesari(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some(moon_house), Some(jupiter_house)) = (
        chart.house_of_planet(Planet::Moon),
        chart.house_of_planet(Planet::Jupiter),
    ) else {
        return Vec::new();
    };

    let diff = (moon_house as i8 - jupiter_house as i8).abs();
    if !matches!(diff, 0 | 3 | 6 | 9) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Gaja Kesari Yoga",
        category: YogaCategory::Raj,
        description: "Moon and Jupiter in mutual kendras. Brings wisdom, wealth, and respect."
            .into(),
        strength: if diff == 0 {
            Strength::Strong
        } else {
            Strength::Moderate
        },
        planets: vec![Planet::Moon, Planet::Jupiter],
        houses: vec![moon_house, jupiter_house],
        classical_source: "BPHS Chapter 41",
        benefic: true,
    }]
}

/// Dharma Karmadhipati: lords of the 5th and 9th conjunct.
pub fn dharma_karmadhipati(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_5, house_5)), Some((lord_9, house_9))) =
        (lord_and_house(chart, 5), lord_and_house(chart, 9))
    else {
        return Vec::new();
    };

    if !chart.planets_conjunct(lord_5, lord_9, CONJUNCTION_ORB) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Dharma Karmadhipati Raj Yoga",
        category: YogaCategory::Raj,
        description: "Lords of 5th and 9th houses conjunct. Powerful raj yoga for success.".into(),
        strength: Strength::Strong,
        planets: vec![lord_5, lord_9],
        houses: vec![house_5, house_9],
        classical_source: "BPHS",
        benefic: true,
    }]
}

/// Dhana: lords of the 2nd and 11th conjunct.
pub fn dhana(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_2, house_2)), Some((lord_11, house_11))) =
        (lord_and_house(chart, 2), lord_and_house(chart, 11))
    else {
        return Vec::new();
    };

    if !chart.planets_conjunct(lord_2, lord_11, CONJUNCTION_ORB) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Dhana Yoga",
        category: YogaCategory::Dhana,
        description: "Lords of 2nd and 11th houses conjunct. Indicates wealth accumulation."
            .into(),
        strength: Strength::Moderate,
        planets: vec![lord_2, lord_11],
        houses: vec![house_2, house_11],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Shared shape of the five Mahapurusha rules: the planet in a kendra in
/// its own or exaltation sign.
fn mahapurusha(
    chart: &ChartSnapshot,
    planet: Planet,
    name: &'static str,
    description: &'static str,
) -> Vec<YogaMatch> {
    let Some(placement) = chart.placement(planet) else {
        return Vec::new();
    };
    if !KENDRA_HOUSES.contains(&placement.house)
        || !matches!(placement.dignity, Dignity::OwnSign | Dignity::Exalted)
    {
        return Vec::new();
    }

    vec![YogaMatch {
        name,
        category: YogaCategory::PanchaMahapurusha,
        description: description.into(),
        strength: Strength::Strong,
        planets: vec![planet],
        houses: vec![placement.house],
        classical_source: "BPHS",
        benefic: true,
    }]
}

/// Ruchaka: Mars in kendra in own/exaltation sign.
pub fn ruchaka(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    mahapurusha(
        chart,
        Planet::Mars,
        "Ruchaka Yoga",
        "Mars in kendra in own/exaltation. Gives courage, military prowess.",
    )
}

/// Bhadra: Mercury in kendra in own/exaltation sign.
pub fn bhadra(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    mahapurusha(
        chart,
        Planet::Mercury,
        "Bhadra Yoga",
        "Mercury in kendra in own/exaltation. Brings intelligence, communication skills.",
    )
}

/// Hamsa: Jupiter in kendra in own/exaltation sign.
pub fn hamsa(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    mahapurusha(
        chart,
        Planet::Jupiter,
        "Hamsa Yoga",
        "Jupiter in kendra in own/exaltation. Bestows wisdom, spirituality.",
    )
}

/// Malavya: Venus in kendra in own/exaltation sign.
pub fn malavya(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    mahapurusha(
        chart,
        Planet::Venus,
        "Malavya Yoga",
        "Venus in kendra in own/exaltation. Grants luxury, artistic talent.",
    )
}

/// Sasa: Saturn in kendra in own/exaltation sign.
pub fn sasa(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    mahapurusha(
        chart,
        Planet::Saturn,
        "Sasa Yoga",
        "Saturn in kendra in own/exaltation. Gives discipline, longevity.",
    )
}

/// Viparita Raja: two or more dusthana lords placed in dusthanas. The one
/// stateful rule: the sorted lord set is recorded in the run state so
/// permutations of the same combination are reported once per run.
pub fn viparita_raja(chart: &ChartSnapshot, state: &mut RunState) -> Vec<YogaMatch> {
    let mut lords = Vec::new();
    for house in DUSTHANA_HOUSES {
        if let Some((lord, lord_house)) = lord_and_house(chart, house) {
            if DUSTHANA_HOUSES.contains(&lord_house) {
                lords.push(lord);
            }
        }
    }

    if lords.len() < 2 {
        return Vec::new();
    }

    let unique = dedup_ordered(lords);
    let mut key = unique.clone();
    key.sort_by_key(|p| p.index());
    if !state.seen_dusthana_combos.insert(key) {
        return Vec::new();
    }

    let houses = unique
        .iter()
        .filter_map(|&p| chart.house_of_planet(p))
        .collect();
    vec![YogaMatch {
        name: "Viparita Raja Yoga",
        category: YogaCategory::Raj,
        description: "Lords of dusthanas in dusthanas. Success from adversity.".into(),
        strength: Strength::Moderate,
        planets: unique,
        houses,
        classical_source: "BPHS",
        benefic: true,
    }]
}

/// Lakshmi: the 9th lord in kendra/trikona while Venus sits in Taurus,
/// Libra, or Pisces.
pub fn lakshmi(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_9, lord_9_house)), Some(venus)) =
        (lord_and_house(chart, 9), chart.placement(Planet::Venus))
    else {
        return Vec::new();
    };

    if !KENDRA_TRIKONA.contains(&lord_9_house)
        || !matches!(venus.sign, Sign::Taurus | Sign::Libra | Sign::Pisces)
    {
        return Vec::new();
    }

    let mut planets = vec![lord_9];
    if lord_9 != Planet::Venus {
        planets.push(Planet::Venus);
    }

    vec![YogaMatch {
        name: "Lakshmi Yoga",
        category: YogaCategory::Dhana,
        description:
            "Lord of 9th in kendra/trikona with Venus in own/exalted sign. Brings wealth and prosperity."
                .into(),
        strength: Strength::Strong,
        planets,
        houses: vec![lord_9_house, venus.house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Kubera: lords of the 1st and 2nd conjunct.
pub fn kubera(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_1, lord_1_house)), Some((lord_2, _))) =
        (lord_and_house(chart, 1), lord_and_house(chart, 2))
    else {
        return Vec::new();
    };

    if !chart.planets_conjunct(lord_1, lord_2, CONJUNCTION_ORB) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Kubera Yoga",
        category: YogaCategory::Dhana,
        description: "Lords of 1st and 2nd conjunct. Great wealth yoga.".into(),
        strength: Strength::Moderate,
        planets: vec![lord_1, lord_2],
        houses: vec![lord_1_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Budha Aditya: Sun-Mercury conjunction within 8 degrees; strong when the
/// separation is 3 degrees or less.
pub fn budha_aditya(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    if !chart.planets_conjunct(Planet::Sun, Planet::Mercury, 8.0) {
        return Vec::new();
    }
    let (Some(sun), Some(mercury)) = (
        chart.placement(Planet::Sun),
        chart.placement(Planet::Mercury),
    ) else {
        return Vec::new();
    };

    let diff = separation(sun.longitude, mercury.longitude);
    vec![YogaMatch {
        name: "Budha Aditya Yoga",
        category: YogaCategory::Knowledge,
        description: "Sun-Mercury close conjunction. Grants intelligence and communication skills."
            .into(),
        strength: if diff <= 3.0 {
            Strength::Strong
        } else {
            Strength::Moderate
        },
        planets: vec![Planet::Sun, Planet::Mercury],
        houses: vec![sun.house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Saraswati: Mercury, Jupiter, and Venus all in kendra/trikona.
pub fn saraswati(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some(mercury_house), Some(jupiter_house), Some(venus_house)) = (
        chart.house_of_planet(Planet::Mercury),
        chart.house_of_planet(Planet::Jupiter),
        chart.house_of_planet(Planet::Venus),
    ) else {
        return Vec::new();
    };

    if !(KENDRA_TRIKONA.contains(&mercury_house)
        && KENDRA_TRIKONA.contains(&jupiter_house)
        && KENDRA_TRIKONA.contains(&venus_house))
    {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Saraswati Yoga",
        category: YogaCategory::Knowledge,
        description: "Mercury, Jupiter, Venus in kendra/trikona. Grants learning and wisdom."
            .into(),
        strength: Strength::Strong,
        planets: vec![Planet::Mercury, Planet::Jupiter, Planet::Venus],
        houses: vec![mercury_house, jupiter_house, venus_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Chandra Mangala: Moon-Mars conjunction.
pub fn chandra_mangala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    if !chart.planets_conjunct(Planet::Moon, Planet::Mars, CONJUNCTION_ORB) {
        return Vec::new();
    }
    let Some(moon_house) = chart.house_of_planet(Planet::Moon) else {
        return Vec::new();
    };

    vec![YogaMatch {
        name: "Chandra Mangala Yoga",
        category: YogaCategory::Dhana,
        description: "Moon-Mars conjunction. Wealth through hard work.".into(),
        strength: Strength::Moderate,
        planets: vec![Planet::Moon, Planet::Mars],
        houses: vec![moon_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Guru Mangala: Jupiter-Mars conjunction.
pub fn guru_mangala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    if !chart.planets_conjunct(Planet::Jupiter, Planet::Mars, CONJUNCTION_ORB) {
        return Vec::new();
    }
    let Some(jupiter_house) = chart.house_of_planet(Planet::Jupiter) else {
        return Vec::new();
    };

    vec![YogaMatch {
        name: "Guru Mangala Yoga",
        category: YogaCategory::Power,
        description: "Jupiter-Mars conjunction. Leadership and strategic thinking.".into(),
        strength: Strength::Strong,
        planets: vec![Planet::Jupiter, Planet::Mars],
        houses: vec![jupiter_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Amala: a benefic in the 10th from the Moon. Benefics are tried in fixed
/// priority order (Jupiter, Venus, Mercury); the first hit is reported and
/// the scan stops.
pub fn amala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some(moon_house) = chart.house_of_planet(Planet::Moon) else {
        return Vec::new();
    };
    let tenth_from_moon = house_from(moon_house, 10);

    for benefic in NATURAL_BENEFICS {
        if chart.house_of_planet(benefic) == Some(tenth_from_moon) {
            return vec![YogaMatch {
                name: "Amala Yoga",
                category: YogaCategory::Fame,
                description: "Benefic in 10th from Moon. Brings fame and reputation.".into(),
                strength: Strength::Moderate,
                planets: vec![benefic],
                houses: vec![tenth_from_moon],
                classical_source: "Classical texts",
                benefic: true,
            }];
        }
    }
    Vec::new()
}

/// Chamara: two benefics sharing one of houses 1, 7, 9, 10. Houses are
/// scanned in that order and the first qualifying house wins.
pub fn chamara(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    for house in [1u8, 7, 9, 10] {
        let in_house: Vec<Planet> = NATURAL_BENEFICS
            .iter()
            .copied()
            .filter(|&b| chart.house_of_planet(b) == Some(house))
            .collect();
        if in_house.len() >= 2 {
            return vec![YogaMatch {
                name: "Chamara Yoga",
                category: YogaCategory::Fame,
                description: "Two benefics in angular houses. Royal honors and fame.".into(),
                strength: Strength::Moderate,
                planets: in_house,
                houses: vec![house],
                classical_source: "Classical texts",
                benefic: true,
            }];
        }
    }
    Vec::new()
}

/// Adhi: benefics covering all of the 6th, 7th, and 8th from the Moon.
/// Strong when all three benefics participate.
pub fn adhi(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some(moon_house) = chart.house_of_planet(Planet::Moon) else {
        return Vec::new();
    };
    let adhi_houses = [
        house_from(moon_house, 6),
        house_from(moon_house, 7),
        house_from(moon_house, 8),
    ];

    let mut present = Vec::new();
    let mut covered: Vec<u8> = Vec::new();
    for benefic in NATURAL_BENEFICS {
        if let Some(h) = chart.house_of_planet(benefic) {
            if adhi_houses.contains(&h) {
                present.push(benefic);
                if !covered.contains(&h) {
                    covered.push(h);
                }
            }
        }
    }

    if covered.len() != 3 {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Adhi Yoga",
        category: YogaCategory::Raj,
        description:
            "Benefics in all of 6th, 7th, and 8th from Moon. Powerful leadership qualities."
                .into(),
        strength: if present.len() == 3 {
            Strength::Strong
        } else {
            Strength::Moderate
        },
        planets: present,
        houses: adhi_houses.to_vec(),
        classical_source: "BPHS",
        benefic: true,
    }]
}

/// Kahala: lords of the 4th and 9th in mutual kendras.
pub fn kahala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_4, house_4)), Some((lord_9, house_9))) =
        (lord_and_house(chart, 4), lord_and_house(chart, 9))
    else {
        return Vec::new();
    };

    if !mutual_kendra(house_4, house_9) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Kahala Yoga",
        category: YogaCategory::Raj,
        description: "Lords of 4th and 9th in mutual kendras. Success and recognition.".into(),
        strength: Strength::Moderate,
        planets: vec![lord_4, lord_9],
        houses: vec![house_4, house_9],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Vasumathi: two or more benefics in upachaya houses.
pub fn vasumathi(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let in_upachaya: Vec<Planet> = NATURAL_BENEFICS
        .iter()
        .copied()
        .filter(|&b| {
            chart
                .house_of_planet(b)
                .is_some_and(|h| UPACHAYA_HOUSES.contains(&h))
        })
        .collect();

    if in_upachaya.len() < 2 {
        return Vec::new();
    }

    let houses = in_upachaya
        .iter()
        .filter_map(|&b| chart.house_of_planet(b))
        .collect();
    vec![YogaMatch {
        name: "Vasumathi Yoga",
        category: YogaCategory::Dhana,
        description: "Benefics in upachaya houses. Wealth through perseverance.".into(),
        strength: Strength::Moderate,
        planets: in_upachaya,
        houses,
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Parvata: lagna and 12th lords both in kendra/trikona, with at least two
/// benefics in kendras.
pub fn parvata(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some((lord_1, lord_1_house)), Some((lord_12, lord_12_house))) =
        (lord_and_house(chart, 1), lord_and_house(chart, 12))
    else {
        return Vec::new();
    };

    if !(KENDRA_TRIKONA.contains(&lord_1_house) && KENDRA_TRIKONA.contains(&lord_12_house)) {
        return Vec::new();
    }

    let benefics_in_kendra: Vec<Planet> = NATURAL_BENEFICS
        .iter()
        .copied()
        .filter(|&b| {
            chart
                .house_of_planet(b)
                .is_some_and(|h| KENDRA_HOUSES.contains(&h))
        })
        .collect();

    if benefics_in_kendra.len() < 2 {
        return Vec::new();
    }

    let mut involved = vec![lord_1, lord_12];
    involved.extend(benefics_in_kendra);
    let involved = dedup_ordered(involved);
    let houses = involved
        .iter()
        .filter_map(|&p| chart.house_of_planet(p))
        .collect();

    vec![YogaMatch {
        name: "Parvata Yoga",
        category: YogaCategory::Raj,
        description:
            "Lagna and 12th lords in kendra/trikona with benefics in kendras. Fame and authority."
                .into(),
        strength: Strength::Moderate,
        planets: involved,
        houses,
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Neecha Bhanga Raja: a debilitated planet whose sign lord stands in a
/// kendra. Planets are scanned in placement order; the first cancellation
/// found is reported and the scan stops.
pub fn neecha_bhanga(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    for placement in &chart.placements {
        if placement.dignity != Dignity::Debilitated {
            continue;
        }
        let Some(lord_house) = chart.house_of_planet(placement.sign_lord) else {
            continue;
        };
        if KENDRA_HOUSES.contains(&lord_house) {
            return vec![YogaMatch {
                name: "Neecha Bhanga Raja Yoga",
                category: YogaCategory::Raj,
                description: format!(
                    "{} debilitation cancelled. Turns weakness into strength.",
                    placement.planet.name()
                ),
                strength: Strength::Strong,
                planets: vec![placement.planet, placement.sign_lord],
                houses: vec![placement.house, lord_house],
                classical_source: "BPHS",
                benefic: true,
            }];
        }
    }
    Vec::new()
}

/// Parijata: the lord of the sign occupied by the lagna lord placed in
/// kendra/trikona.
pub fn parijata(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some(lord_1) = chart.house_lord(1) else {
        return Vec::new();
    };
    let Some(lord_1_placement) = chart.placement(lord_1) else {
        return Vec::new();
    };
    let dispositor = lord_1_placement.sign_lord;
    let Some(dispositor_house) = chart.house_of_planet(dispositor) else {
        return Vec::new();
    };

    if !KENDRA_TRIKONA.contains(&dispositor_house) {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Parijata Yoga",
        category: YogaCategory::Raj,
        description: "Ascendant lord well-placed. Happiness and prosperity.".into(),
        strength: Strength::Moderate,
        planets: vec![lord_1, dispositor],
        houses: vec![dispositor_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Kala Sarpa: all seven classical planets hemmed on one side of the
/// Rahu-Ketu axis. The wraparound comparison is deliberately asymmetric
/// (closed interval when Rahu's longitude is below Ketu's) — a literal
/// behavior of the rule set, kept as-is.
pub fn kala_sarpa(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let (Some(rahu), Some(ketu)) = (
        chart.placement(Planet::Rahu),
        chart.placement(Planet::Ketu),
    ) else {
        return Vec::new();
    };

    let hemmed = CLASSICAL_PLANETS.iter().all(|&p| {
        let Some(placement) = chart.placement(p) else {
            return false;
        };
        let lon = placement.longitude;
        if rahu.longitude < ketu.longitude {
            rahu.longitude <= lon && lon <= ketu.longitude
        } else {
            lon >= rahu.longitude || lon <= ketu.longitude
        }
    });

    if !hemmed {
        return Vec::new();
    }

    vec![YogaMatch {
        name: "Kala Sarpa Yoga",
        category: YogaCategory::Arishta,
        description: "All planets between Rahu-Ketu axis. Challenges and transformations.".into(),
        strength: Strength::Strong,
        planets: vec![Planet::Rahu, Planet::Ketu],
        houses: vec![rahu.house, ketu.house],
        classical_source: "Classical texts",
        benefic: false,
    }]
}

/// Grahan: a luminary conjunct a node within 5 degrees. Solar and lunar
/// variants are independent; both can fire in one run.
pub fn grahan(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let mut matches = Vec::new();

    if chart.planets_conjunct(Planet::Sun, Planet::Rahu, 5.0)
        || chart.planets_conjunct(Planet::Sun, Planet::Ketu, 5.0)
    {
        if let Some(sun_house) = chart.house_of_planet(Planet::Sun) {
            matches.push(YogaMatch {
                name: "Grahan Yoga (Solar)",
                category: YogaCategory::Arishta,
                description: "Sun eclipsed by Rahu/Ketu. Ego challenges.".into(),
                strength: Strength::Moderate,
                planets: vec![Planet::Sun],
                houses: vec![sun_house],
                classical_source: "Classical texts",
                benefic: false,
            });
        }
    }

    if chart.planets_conjunct(Planet::Moon, Planet::Rahu, 5.0)
        || chart.planets_conjunct(Planet::Moon, Planet::Ketu, 5.0)
    {
        if let Some(moon_house) = chart.house_of_planet(Planet::Moon) {
            matches.push(YogaMatch {
                name: "Grahan Yoga (Lunar)",
                category: YogaCategory::Arishta,
                description: "Moon eclipsed by Rahu/Ketu. Emotional turbulence.".into(),
                strength: Strength::Moderate,
                planets: vec![Planet::Moon],
                houses: vec![moon_house],
                classical_source: "Classical texts",
                benefic: false,
            });
        }
    }

    matches
}

/// Srik: a benefic in kendra from the lagna lord. First benefic in
/// priority order wins.
pub fn srik(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some((lord_1, lord_1_house)) = lord_and_house(chart, 1) else {
        return Vec::new();
    };

    for benefic in NATURAL_BENEFICS {
        let Some(benefic_house) = chart.house_of_planet(benefic) else {
            continue;
        };
        if mutual_kendra(benefic_house, lord_1_house) {
            return vec![YogaMatch {
                name: "Srik Yoga",
                category: YogaCategory::Dhana,
                description: "Benefic in kendra from lagna lord. Wealth and comfort.".into(),
                strength: Strength::Moderate,
                planets: vec![lord_1, benefic],
                houses: vec![lord_1_house, benefic_house],
                classical_source: "Classical texts",
                benefic: true,
            }];
        }
    }
    Vec::new()
}

/// Voshi: a planet (other than the Moon) in the 12th from the Sun. Scan
/// order Mars, Mercury, Jupiter, Venus, Saturn; first hit wins.
pub fn voshi(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some(sun_house) = chart.house_of_planet(Planet::Sun) else {
        return Vec::new();
    };
    let twelfth_from_sun = house_from(sun_house, 11);

    for planet in [
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ] {
        if chart.house_of_planet(planet) == Some(twelfth_from_sun) {
            return vec![YogaMatch {
                name: "Voshi Yoga",
                category: YogaCategory::Knowledge,
                description: "Planet in 12th from Sun. Good speech and earning capacity.".into(),
                strength: Strength::Weak,
                planets: vec![planet, Planet::Sun],
                houses: vec![twelfth_from_sun, sun_house],
                classical_source: "Classical texts",
                benefic: true,
            }];
        }
    }
    Vec::new()
}

/// Ubhayachari: planets flanking the Sun on both sides (2nd and 12th from
/// it).
pub fn ubhayachari(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    let Some(sun_house) = chart.house_of_planet(Planet::Sun) else {
        return Vec::new();
    };
    let second_from_sun = house_from(sun_house, 1);
    let twelfth_from_sun = house_from(sun_house, 11);

    let mut in_second = Vec::new();
    let mut in_twelfth = Vec::new();
    for planet in [
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ] {
        match chart.house_of_planet(planet) {
            Some(h) if h == second_from_sun => in_second.push(planet),
            Some(h) if h == twelfth_from_sun => in_twelfth.push(planet),
            _ => {}
        }
    }

    if in_second.is_empty() || in_twelfth.is_empty() {
        return Vec::new();
    }

    let mut planets = in_second;
    planets.extend(in_twelfth);
    planets.push(Planet::Sun);
    vec![YogaMatch {
        name: "Ubhayachari Yoga",
        category: YogaCategory::Knowledge,
        description: "Planets on both sides of Sun. Balanced personality and success.".into(),
        strength: Strength::Moderate,
        planets,
        houses: vec![sun_house, second_from_sun, twelfth_from_sun],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Shared shape of the three dusthana-lord rules: the lord of the given
/// house itself placed in a dusthana.
fn dusthana_lord_rule(
    chart: &ChartSnapshot,
    house: u8,
    name: &'static str,
    description: &'static str,
) -> Vec<YogaMatch> {
    let Some((lord, lord_house)) = lord_and_house(chart, house) else {
        return Vec::new();
    };
    if !DUSTHANA_HOUSES.contains(&lord_house) {
        return Vec::new();
    }

    vec![YogaMatch {
        name,
        category: YogaCategory::ViparitaRaj,
        description: description.into(),
        strength: Strength::Moderate,
        planets: vec![lord],
        houses: vec![lord_house],
        classical_source: "Classical texts",
        benefic: true,
    }]
}

/// Harsha: lord of the 6th in a dusthana.
pub fn harsha(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    dusthana_lord_rule(
        chart,
        6,
        "Harsha Yoga",
        "Lord of 6th in dusthana. Victory over enemies.",
    )
}

/// Sarala: lord of the 8th in a dusthana.
pub fn sarala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    dusthana_lord_rule(
        chart,
        8,
        "Sarala Yoga",
        "Lord of 8th in dusthana. Protection from adversity.",
    )
}

/// Vimala: lord of the 12th in a dusthana.
pub fn vimala(chart: &ChartSnapshot, _state: &mut RunState) -> Vec<YogaMatch> {
    dusthana_lord_rule(
        chart,
        12,
        "Vimala Yoga",
        "Lord of 12th in dusthana. Spiritual growth and detachment.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Placement;

    /// Aries-rising chart with planets at the given longitudes; house N is
    /// the sign N-1 forward from Aries.
    fn chart_with(positions: &[(Planet, f64)]) -> ChartSnapshot {
        let asc = 15.0;
        let placements = positions
            .iter()
            .map(|&(p, lon)| Placement::derive(p, lon, 0.0, 1.0, false, asc))
            .collect();
        ChartSnapshot::assemble(asc, placements)
    }

    fn run(rule: super::super::Rule, chart: &ChartSnapshot) -> Vec<YogaMatch> {
        let mut state = RunState::default();
        rule(chart, &mut state)
    }

    #[test]
    fn gaja_kesari_moderate_at_distance() {
        // Moon house 1, Jupiter house 10: |1-10| = 9 → fires, moderate.
        let chart = chart_with(&[(Planet::Moon, 20.0), (Planet::Jupiter, 285.0)]);
        let matches = run(gaja_kesari, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].strength, Strength::Moderate);
        assert_eq!(matches[0].houses, vec![1, 10]);
    }

    #[test]
    fn gaja_kesari_strong_same_house() {
        let chart = chart_with(&[(Planet::Moon, 20.0), (Planet::Jupiter, 25.0)]);
        let matches = run(gaja_kesari, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].strength, Strength::Strong);
    }

    #[test]
    fn gaja_kesari_silent_otherwise() {
        // Houses 1 and 2: no kendra relation.
        let chart = chart_with(&[(Planet::Moon, 20.0), (Planet::Jupiter, 40.0)]);
        assert!(run(gaja_kesari, &chart).is_empty());
    }

    #[test]
    fn ruchaka_mars_own_sign_kendra() {
        // Mars in Aries (own sign) rising: house 1, a kendra.
        let chart = chart_with(&[(Planet::Mars, 10.0)]);
        let matches = run(ruchaka, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].planets, vec![Planet::Mars]);
    }

    #[test]
    fn ruchaka_needs_dignity() {
        // Mars in Taurus (house 2, friend at best): silent.
        let chart = chart_with(&[(Planet::Mars, 40.0)]);
        assert!(run(ruchaka, &chart).is_empty());
    }

    #[test]
    fn budha_aditya_strength_by_orb() {
        let close = chart_with(&[(Planet::Sun, 100.0), (Planet::Mercury, 102.0)]);
        assert_eq!(run(budha_aditya, &close)[0].strength, Strength::Strong);

        let wide = chart_with(&[(Planet::Sun, 100.0), (Planet::Mercury, 107.0)]);
        assert_eq!(run(budha_aditya, &wide)[0].strength, Strength::Moderate);

        let none = chart_with(&[(Planet::Sun, 100.0), (Planet::Mercury, 109.0)]);
        assert!(run(budha_aditya, &none).is_empty());
    }

    #[test]
    fn amala_first_benefic_wins() {
        // Moon in house 2; target house is (2+9)%12+1 = 12. Both Jupiter
        // and Venus sit there, but only Jupiter (higher priority) reports.
        let chart = chart_with(&[
            (Planet::Moon, 40.0),
            (Planet::Jupiter, 350.0),
            (Planet::Venus, 355.0),
        ]);
        let matches = run(amala, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].planets, vec![Planet::Jupiter]);
        assert_eq!(matches[0].houses, vec![12]);
    }

    #[test]
    fn chamara_first_house_in_scan_order_wins() {
        // Mercury alone in house 9, two benefics in house 1: scan order
        // [1,7,9,10] reports house 1.
        let chart = chart_with(&[
            (Planet::Jupiter, 10.0),
            (Planet::Venus, 12.0),
            (Planet::Mercury, 250.0),
        ]);
        let matches = run(chamara, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].houses, vec![1]);
        assert_eq!(matches[0].planets, vec![Planet::Jupiter, Planet::Venus]);
    }

    #[test]
    fn adhi_requires_all_three_houses() {
        // Moon house 1: targets are houses 7, 8, 9.
        let covered = chart_with(&[
            (Planet::Moon, 20.0),
            (Planet::Jupiter, 190.0),  // Libra, house 7
            (Planet::Venus, 220.0),    // Scorpio, house 8
            (Planet::Mercury, 250.0),  // Sagittarius, house 9
        ]);
        let matches = run(adhi, &covered);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].strength, Strength::Strong);
        assert_eq!(matches[0].houses, vec![7, 8, 9]);

        // Only two of the three houses covered: silent.
        let partial = chart_with(&[
            (Planet::Moon, 20.0),
            (Planet::Jupiter, 190.0),
            (Planet::Venus, 195.0),
            (Planet::Mercury, 250.0),
        ]);
        assert!(run(adhi, &partial).is_empty());
    }

    #[test]
    fn viparita_fires_once_per_combo() {
        // Aries rising: 6th = Virgo (Mercury), 8th = Scorpio (Mars),
        // 12th = Pisces (Jupiter). All three lords in dusthanas.
        let chart = chart_with(&[
            (Planet::Mercury, 160.0), // Virgo, house 6
            (Planet::Mars, 220.0),    // Scorpio, house 8
            (Planet::Jupiter, 350.0), // Pisces, house 12
        ]);
        let mut state = RunState::default();
        let first = viparita_raja(&chart, &mut state);
        assert_eq!(first.len(), 1);
        assert_eq!(
            first[0].planets,
            vec![Planet::Mercury, Planet::Mars, Planet::Jupiter]
        );
        // Same combination again within the same run: suppressed.
        assert!(viparita_raja(&chart, &mut state).is_empty());
        // A fresh run has fresh state.
        let mut fresh = RunState::default();
        assert_eq!(viparita_raja(&chart, &mut fresh).len(), 1);
    }

    #[test]
    fn viparita_needs_two_lords() {
        let chart = chart_with(&[(Planet::Mercury, 160.0)]);
        let mut state = RunState::default();
        assert!(viparita_raja(&chart, &mut state).is_empty());
    }

    #[test]
    fn kala_sarpa_hemmed_and_not() {
        // Rahu 10, Ketu 190: all classical planets inside [10, 190].
        let hemmed = chart_with(&[
            (Planet::Sun, 50.0),
            (Planet::Moon, 80.0),
            (Planet::Mars, 100.0),
            (Planet::Mercury, 60.0),
            (Planet::Jupiter, 150.0),
            (Planet::Venus, 40.0),
            (Planet::Saturn, 185.0),
            (Planet::Rahu, 10.0),
            (Planet::Ketu, 190.0),
        ]);
        assert_eq!(run(kala_sarpa, &hemmed).len(), 1);
        assert!(!run(kala_sarpa, &hemmed)[0].benefic);

        // Saturn escapes the hemisphere: silent.
        let free = chart_with(&[
            (Planet::Sun, 50.0),
            (Planet::Moon, 80.0),
            (Planet::Mars, 100.0),
            (Planet::Mercury, 60.0),
            (Planet::Jupiter, 150.0),
            (Planet::Venus, 40.0),
            (Planet::Saturn, 300.0),
            (Planet::Rahu, 10.0),
            (Planet::Ketu, 190.0),
        ]);
        assert!(run(kala_sarpa, &free).is_empty());
    }

    #[test]
    fn kala_sarpa_wrapped_axis() {
        // Rahu 300, Ketu 120: hemmed means lon >= 300 or lon <= 120.
        let chart = chart_with(&[
            (Planet::Sun, 310.0),
            (Planet::Moon, 10.0),
            (Planet::Mars, 50.0),
            (Planet::Mercury, 330.0),
            (Planet::Jupiter, 100.0),
            (Planet::Venus, 340.0),
            (Planet::Saturn, 119.0),
            (Planet::Rahu, 300.0),
            (Planet::Ketu, 120.0),
        ]);
        assert_eq!(run(kala_sarpa, &chart).len(), 1);
    }

    #[test]
    fn grahan_solar_and_lunar_independent() {
        let chart = chart_with(&[
            (Planet::Sun, 100.0),
            (Planet::Rahu, 103.0),
            (Planet::Moon, 280.0),
            (Planet::Ketu, 283.0),
        ]);
        let matches = run(grahan, &chart);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Grahan Yoga (Solar)");
        assert_eq!(matches[1].name, "Grahan Yoga (Lunar)");
    }

    #[test]
    fn neecha_bhanga_first_cancellation_wins() {
        // Sun debilitated in Libra (house 7); Venus (Libra's lord) also in
        // house 7, a kendra → cancellation.
        let chart = chart_with(&[(Planet::Sun, 185.0), (Planet::Venus, 200.0)]);
        let matches = run(neecha_bhanga, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].planets, vec![Planet::Sun, Planet::Venus]);
        assert!(matches[0].description.starts_with("Sun"));
    }

    #[test]
    fn voshi_scan_order() {
        // Sun house 5; 12th from Sun is house 4. Mercury and Saturn both
        // there — Mercury is earlier in the scan.
        let chart = chart_with(&[
            (Planet::Sun, 130.0),
            (Planet::Mercury, 100.0),
            (Planet::Saturn, 105.0),
        ]);
        let matches = run(voshi, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].planets, vec![Planet::Mercury, Planet::Sun]);
        assert_eq!(matches[0].strength, Strength::Weak);
    }

    #[test]
    fn ubhayachari_needs_both_sides() {
        let both = chart_with(&[
            (Planet::Sun, 130.0),    // house 5
            (Planet::Mercury, 100.0), // house 4
            (Planet::Venus, 160.0),  // house 6
        ]);
        let matches = run(ubhayachari, &both);
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].planets,
            vec![Planet::Venus, Planet::Mercury, Planet::Sun]
        );

        let one_side = chart_with(&[(Planet::Sun, 130.0), (Planet::Mercury, 100.0)]);
        assert!(run(ubhayachari, &one_side).is_empty());
    }

    #[test]
    fn harsha_sarala_vimala() {
        // Aries rising. Harsha: Mercury (6th lord) in house 6.
        let chart = chart_with(&[(Planet::Mercury, 160.0)]);
        assert_eq!(run(harsha, &chart).len(), 1);
        // Sarala: Mars (8th lord) in house 12 (Pisces).
        let chart = chart_with(&[(Planet::Mars, 350.0)]);
        assert_eq!(run(sarala, &chart).len(), 1);
        // Vimala: Jupiter (12th lord) in house 8 (Scorpio).
        let chart = chart_with(&[(Planet::Jupiter, 220.0)]);
        assert_eq!(run(vimala, &chart).len(), 1);
        // Lord in a good house: silent.
        let chart = chart_with(&[(Planet::Mercury, 10.0)]);
        assert!(run(harsha, &chart).is_empty());
    }

    #[test]
    fn lakshmi_requires_both_conditions() {
        // Aries rising: 9th = Sagittarius, lord Jupiter. Jupiter in house 9
        // (trikona) and Venus in Taurus.
        let chart = chart_with(&[(Planet::Jupiter, 250.0), (Planet::Venus, 45.0)]);
        let matches = run(lakshmi, &chart);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].planets, vec![Planet::Jupiter, Planet::Venus]);

        // Venus outside its strong signs: silent.
        let chart = chart_with(&[(Planet::Jupiter, 250.0), (Planet::Venus, 100.0)]);
        assert!(run(lakshmi, &chart).is_empty());
    }

    #[test]
    fn saraswati_all_three_well_placed() {
        let chart = chart_with(&[
            (Planet::Mercury, 10.0),  // house 1
            (Planet::Jupiter, 130.0), // house 5
            (Planet::Venus, 280.0),   // house 10
        ]);
        assert_eq!(run(saraswati, &chart).len(), 1);

        let chart = chart_with(&[
            (Planet::Mercury, 40.0), // house 2: not kendra/trikona
            (Planet::Jupiter, 130.0),
            (Planet::Venus, 280.0),
        ]);
        assert!(run(saraswati, &chart).is_empty());
    }
}
