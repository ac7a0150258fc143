//! Zodiac signs, sign lookup from longitude, and sign lordship.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees sidereal.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

/// Planetary lord of a sign.
///
/// Mars rules Aries/Scorpio, Venus rules Taurus/Libra, Mercury rules
/// Gemini/Virgo, the luminaries rule Cancer and Leo, Jupiter rules
/// Sagittarius/Pisces, and Saturn rules Capricorn/Aquarius.
pub const fn sign_lord(sign: Sign) -> Planet {
    match sign {
        Sign::Aries => Planet::Mars,
        Sign::Taurus => Planet::Venus,
        Sign::Gemini => Planet::Mercury,
        Sign::Cancer => Planet::Moon,
        Sign::Leo => Planet::Sun,
        Sign::Virgo => Planet::Mercury,
        Sign::Libra => Planet::Venus,
        Sign::Scorpio => Planet::Mars,
        Sign::Sagittarius => Planet::Jupiter,
        Sign::Capricorn => Planet::Saturn,
        Sign::Aquarius => Planet::Saturn,
        Sign::Pisces => Planet::Jupiter,
    }
}

/// Sign position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignInfo {
    /// The sign containing the longitude.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degree_in_sign: f64,
}

/// Determine the sign from a sidereal ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// and so on. Input is normalized to [0, 360) first.
pub fn sign_from_longitude(sidereal_lon_deg: f64) -> SignInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let sign_index = ((lon / 30.0).floor() as u8).min(11);
    let degree_in_sign = lon - (sign_index as f64) * 30.0;
    SignInfo {
        sign: ALL_SIGNS[sign_index as usize],
        sign_index,
        degree_in_sign,
    }
}
