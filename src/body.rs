//! # Tracked bodies
//!
//! [`Body`] identifies the ten objects of a [`SunSystem`](crate::sun_system::SunSystem)
//! in their fixed order: the Sun first, the eight planets from Mercury to
//! Neptune (Earth included), the Moon last. The order is part of the engine
//! contract, so [`Body::index`] doubles as the slot of the body in every
//! per-system array.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        AstronomicalUnit, Degree, Kilometer, AU_KM, BODY_COUNT, LONGITUDE_AT_2000,
        MEAN_DISTANCE_KM, ORBITAL_PERIOD_DAYS, YEAR_DAYS,
    },
    orbital_elements::{
        OrbitalElementSet, JUPITER, MARS, MERCURY, MOON, NEPTUNE, SATURN, SUN, URANUS, VENUS,
    },
    orrery_errors::OrreryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
}

/// Which branch of the solver handles a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Apparent solar orbit; heliocentric and geocentric longitudes coincide.
    Sun,
    /// Solved heliocentrically, then shifted by the Sun's vector.
    Planet,
    /// Not solved; mirrors the Sun's vector.
    Earth,
    /// Geocentric orbit scaled by the instantaneous radius.
    Moon,
}

impl Body {
    /// Every body in engine order.
    pub const ALL: [Body; BODY_COUNT] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Moon,
    ];

    /// Bodies that receive a geocentric longitude from the Sun's vector.
    pub const GEOCENTRIC_PLANETS: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, OrreryError> {
        Body::ALL
            .get(index)
            .copied()
            .ok_or(OrreryError::UnknownBodyIndex(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Moon => "Moon",
        }
    }

    pub fn kind(self) -> BodyKind {
        match self {
            Body::Sun => BodyKind::Sun,
            Body::Earth => BodyKind::Earth,
            Body::Moon => BodyKind::Moon,
            _ => BodyKind::Planet,
        }
    }

    /// Orbital elements of the body, `None` for the Earth.
    pub fn elements(self) -> Option<&'static OrbitalElementSet> {
        match self {
            Body::Sun => Some(&SUN),
            Body::Mercury => Some(&MERCURY),
            Body::Venus => Some(&VENUS),
            Body::Earth => None,
            Body::Mars => Some(&MARS),
            Body::Jupiter => Some(&JUPITER),
            Body::Saturn => Some(&SATURN),
            Body::Uranus => Some(&URANUS),
            Body::Neptune => Some(&NEPTUNE),
            Body::Moon => Some(&MOON),
        }
    }

    /// Mean orbital distance (the Moon's from the Earth, zero for the Sun).
    pub fn mean_distance_km(self) -> Kilometer {
        MEAN_DISTANCE_KM[self.index()]
    }

    pub fn mean_distance_au(self) -> AstronomicalUnit {
        self.mean_distance_km() / AU_KM
    }

    /// Sidereal orbital period in days (zero for the Sun).
    pub fn orbital_period_days(self) -> f64 {
        ORBITAL_PERIOD_DAYS[self.index()]
    }

    /// Sidereal orbital period in years of [`YEAR_DAYS`] days.
    pub fn orbital_period_years(self) -> f64 {
        self.orbital_period_days() / YEAR_DAYS
    }

    /// Ecliptic longitude at the start of 2000, for display layers.
    pub fn longitude_at_2000(self) -> Degree {
        LONGITUDE_AT_2000[self.index()]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OrreryError::UnknownBody(s.to_string()))
    }
}
