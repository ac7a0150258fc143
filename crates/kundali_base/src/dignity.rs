//! Planetary dignity classification.
//!
//! Dignity is decided by strict precedence against static per-planet
//! tables: exaltation sign, then debilitation sign, then own sign, then
//! friendship or enmity with the sign lord, then neutral. Exaltation and
//! debilitation compare the sign only — any degree within the sign
//! qualifies, no orb around the traditional exact degree is applied.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::sign::{Sign, sign_from_longitude, sign_lord};

/// Dignity of a planet by sign placement, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dignity {
    Exalted,
    Debilitated,
    OwnSign,
    Friend,
    Enemy,
    Neutral,
}

impl Dignity {
    /// Lowercase label matching the wire format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::Debilitated => "debilitated",
            Self::OwnSign => "own_sign",
            Self::Friend => "friend",
            Self::Enemy => "enemy",
            Self::Neutral => "neutral",
        }
    }
}

/// Exaltation sign per planet. The nodes carry the Taurus/Scorpio
/// convention of this rule system.
pub const fn exaltation_sign(planet: Planet) -> Sign {
    match planet {
        Planet::Sun => Sign::Aries,
        Planet::Moon => Sign::Taurus,
        Planet::Mars => Sign::Capricorn,
        Planet::Mercury => Sign::Virgo,
        Planet::Jupiter => Sign::Cancer,
        Planet::Venus => Sign::Pisces,
        Planet::Saturn => Sign::Libra,
        Planet::Rahu => Sign::Taurus,
        Planet::Ketu => Sign::Scorpio,
    }
}

/// Debilitation sign per planet: the sign opposite the exaltation.
pub const fn debilitation_sign(planet: Planet) -> Sign {
    match planet {
        Planet::Sun => Sign::Libra,
        Planet::Moon => Sign::Scorpio,
        Planet::Mars => Sign::Cancer,
        Planet::Mercury => Sign::Pisces,
        Planet::Jupiter => Sign::Capricorn,
        Planet::Venus => Sign::Virgo,
        Planet::Saturn => Sign::Aries,
        Planet::Rahu => Sign::Scorpio,
        Planet::Ketu => Sign::Taurus,
    }
}

/// Friends of a planet (simplified single-level friendship).
pub const fn friends(planet: Planet) -> &'static [Planet] {
    match planet {
        Planet::Sun => &[Planet::Moon, Planet::Mars, Planet::Jupiter],
        Planet::Moon => &[Planet::Sun, Planet::Mercury],
        Planet::Mars => &[Planet::Sun, Planet::Moon, Planet::Jupiter],
        Planet::Mercury => &[Planet::Sun, Planet::Venus],
        Planet::Jupiter => &[Planet::Sun, Planet::Moon, Planet::Mars],
        Planet::Venus => &[Planet::Mercury, Planet::Saturn],
        Planet::Saturn => &[Planet::Mercury, Planet::Venus],
        Planet::Rahu => &[Planet::Mercury, Planet::Venus, Planet::Saturn],
        Planet::Ketu => &[Planet::Mars, Planet::Jupiter],
    }
}

/// Enemies of a planet. The Moon has none.
pub const fn enemies(planet: Planet) -> &'static [Planet] {
    match planet {
        Planet::Sun => &[Planet::Venus, Planet::Saturn],
        Planet::Moon => &[],
        Planet::Mars => &[Planet::Mercury],
        Planet::Mercury => &[Planet::Moon],
        Planet::Jupiter => &[Planet::Mercury, Planet::Venus],
        Planet::Venus => &[Planet::Sun, Planet::Moon],
        Planet::Saturn => &[Planet::Sun, Planet::Moon, Planet::Mars],
        Planet::Rahu => &[Planet::Sun, Planet::Moon, Planet::Mars],
        Planet::Ketu => &[Planet::Sun, Planet::Moon],
    }
}

/// Classify the dignity of a planet at a sidereal longitude.
///
/// Precedence: exalted > debilitated > own sign > friend > enemy > neutral.
/// First match wins.
pub fn dignity_of(planet: Planet, sidereal_lon_deg: f64) -> Dignity {
    let sign = sign_from_longitude(sidereal_lon_deg).sign;

    if sign == exaltation_sign(planet) {
        return Dignity::Exalted;
    }
    if sign == debilitation_sign(planet) {
        return Dignity::Debilitated;
    }

    let lord = sign_lord(sign);
    if lord == planet {
        return Dignity::OwnSign;
    }
    if friends(planet).contains(&lord) {
        return Dignity::Friend;
    }
    if enemies(planet).contains(&lord) {
        return Dignity::Enemy;
    }
    Dignity::Neutral
}
