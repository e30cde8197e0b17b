//! # Constants and type definitions for the orrery
//!
//! This module centralizes the **model constants**, **unit aliases**, and the
//! **display metadata** shared by every other module of the crate.
//!
//! ## Overview
//!
//! - Angular constants of the simplified model (turn value, degree ↔ radian factors)
//! - Day-number offset relating the Gregorian day count to the model epoch
//! - Zodiac sector width
//! - Per-body mean distance, orbital period and longitude at the start of 2000
//!
//! The angular constants intentionally reuse the truncated turn value of the
//! published reference run so that outputs stay reproducible bit-for-bit.

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units (Moon: Earth radii)
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Continuous day count relative to the model epoch
pub type DayNumber = f64;

// -------------------------------------------------------------------------------------------------
// Angular constants
// -------------------------------------------------------------------------------------------------

/// One full turn in radians, as used by the reference model.
pub const TURN: Radian = 6.28318530718;

/// Half a turn in radians (the model's value of π).
pub const HALF_TURN: Radian = TURN / 2.0;

/// Degrees in a full circle.
pub const FULL_CIRCLE: Degree = 360.0;

/// Width of one zodiac sector.
pub const ZODIAC_SECTOR: Degree = 30.0;

/// Number of zodiac signs.
pub const ZODIAC_SIGNS: usize = 12;

// -------------------------------------------------------------------------------------------------
// Time
// -------------------------------------------------------------------------------------------------

/// Offset subtracted by the integer day-number formula.
pub const DAY_NUMBER_OFFSET: i64 = 730_530;

/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Display metadata
// -------------------------------------------------------------------------------------------------

/// Astronomical unit in kilometers, as carried by the model.
pub const AU_KM: Kilometer = 149_597_870.7;

/// Number of bodies tracked by a [`SunSystem`](crate::sun_system::SunSystem).
pub const BODY_COUNT: usize = 10;

/// Mean orbital distances in kilometers, in [`Body`](crate::body::Body) order.
///
/// The Sun entry is zero; the Moon entry is its distance from the Earth.
pub(crate) const MEAN_DISTANCE_KM: [Kilometer; BODY_COUNT] = [
    0.0,
    57_910_000.0,
    108_200_000.0,
    149_600_000.0,
    227_900_000.0,
    778_500_000.0,
    1_434_000_000.0,
    2_871_000_000.0,
    4_495_000_000.0,
    384_400.0,
];

/// Sidereal orbital periods in days, in [`Body`](crate::body::Body) order.
pub(crate) const ORBITAL_PERIOD_DAYS: [f64; BODY_COUNT] = [
    0.0, 87.9365, 224.701, 365.25, 687.35, 4344.0, 10670.0, 31000.0, 60186.0, 27.324151,
];

/// Mean tropical year length used by the display layer, in days.
pub const YEAR_DAYS: f64 = 365.2515;

/// Ecliptic longitude of each body at the start of 2000, in [`Body`](crate::body::Body) order.
pub(crate) const LONGITUDE_AT_2000: [Degree; BODY_COUNT] = [
    0.0, 249.416, 180.03, 98.76, 358.45, 36.15, 45.65, 316.383, 303.9, 98.916,
];
