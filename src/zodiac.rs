//! # Zodiac signs
//!
//! The ecliptic is split into twelve 30° sectors starting at the vernal
//! equinox. A longitude `λ ∈ [0, 360)` falls in sign `floor(λ/30) + 1` and sits
//! `λ mod 30` degrees into it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, ZODIAC_SECTOR, ZODIAC_SIGNS},
    kepler::wrap360,
    orrery_errors::OrreryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 1,
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

impl ZodiacSign {
    pub const ALL: [ZodiacSign; ZODIAC_SIGNS] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// 1-based index of the sign (Aries = 1, Pisces = 12).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, OrreryError> {
        match index {
            1..=12 => Ok(ZodiacSign::ALL[usize::from(index) - 1]),
            _ => Err(OrreryError::UnknownZodiacIndex(index)),
        }
    }

    /// Sign containing an ecliptic longitude. The longitude is reduced first.
    pub fn from_longitude(longitude: Degree) -> Self {
        let sector = (wrap360(longitude) / ZODIAC_SECTOR).floor() as usize;
        ZodiacSign::ALL[sector.min(ZODIAC_SIGNS - 1)]
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the sign with 1-based `index`, `None` outside `1..=12`.
pub fn zodiac_name(index: u8) -> Option<&'static str> {
    ZodiacSign::from_index(index).ok().map(ZodiacSign::name)
}

/// Position of a body within the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    pub sign: ZodiacSign,
    /// Degrees into the sign, in `[0, 30)`.
    pub angle: Degree,
}

impl ZodiacPlacement {
    pub fn from_longitude(longitude: Degree) -> Self {
        let longitude = wrap360(longitude);
        ZodiacPlacement {
            sign: ZodiacSign::from_longitude(longitude),
            angle: longitude % ZODIAC_SECTOR,
        }
    }

    /// 1-based sign index.
    pub fn index(&self) -> u8 {
        self.sign.index()
    }
}

impl fmt::Display for ZodiacPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}°", self.sign, self.angle)
    }
}

#[cfg(test)]
mod zodiac_test {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, sign) in ZodiacSign::ALL.iter().enumerate() {
            assert_eq!(usize::from(sign.index()), i + 1);
        }
        assert_eq!(ZodiacSign::from_index(1), Ok(ZodiacSign::Aries));
        assert_eq!(ZodiacSign::from_index(12), Ok(ZodiacSign::Pisces));
        assert_eq!(
            ZodiacSign::from_index(0),
            Err(OrreryError::UnknownZodiacIndex(0))
        );
        assert_eq!(
            ZodiacSign::from_index(13),
            Err(OrreryError::UnknownZodiacIndex(13))
        );
    }

    #[test]
    fn test_zodiac_name_lookup() {
        assert_eq!(zodiac_name(1), Some("Aries"));
        assert_eq!(zodiac_name(6), Some("Virgo"));
        assert_eq!(zodiac_name(12), Some("Pisces"));
        assert_eq!(zodiac_name(0), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(ZodiacSign::Aries.symbol(), '♈');
        assert_eq!(ZodiacSign::Virgo.symbol(), '♍');
        assert_eq!(ZodiacSign::Pisces.symbol(), '♓');
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(359.999), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(-0.5), ZodiacSign::Pisces);
    }

    #[test]
    fn test_exact_multiple_of_sector_has_zero_angle() {
        let placement = ZodiacPlacement::from_longitude(90.0);
        assert_eq!(placement.sign, ZodiacSign::Cancer);
        assert_eq!(placement.angle, 0.0);
        assert_eq!(placement.index(), 4);
    }

    #[test]
    fn test_placement_angle() {
        let placement = ZodiacPlacement::from_longitude(166.5);
        assert_eq!(placement.sign, ZodiacSign::Virgo);
        assert_eq!(placement.angle, 16.5);
        assert_eq!(placement.to_string(), "Virgo 16.50°");
    }
}
