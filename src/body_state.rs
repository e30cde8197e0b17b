//! # Derived per-body state
//!
//! [`BodyState`] is the record produced by the
//! [`PositionSolver`](crate::solver::PositionSolver) for one body and one day
//! number. It is recomputed from scratch on every run; nothing carries over
//! from a previous day.
//!
//! Field availability by body:
//!
//! | Body | heliocentric | geocentric | zodiac |
//! |---|---|---|---|
//! | Sun, Moon | solved | = heliocentric | yes |
//! | Mercury … Neptune | solved | Sun-shifted | yes |
//! | Earth | mirrored Sun vector | `None` | `None` |

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    body::Body,
    constants::{DayNumber, Degree},
    zodiac::{ZodiacPlacement, ZodiacSign},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub body: Body,
    /// Day number the state was computed for, `None` before the first run.
    pub day: Option<DayNumber>,
    /// Mean longitude `L = w + M`.
    pub mean_longitude: Degree,
    /// Eccentric anomaly `E` (not reduced).
    pub eccentric_anomaly: Degree,
    /// True anomaly `v`.
    pub true_anomaly: Degree,
    /// Orbital-plane radius (Moon: radius after rotation to the ecliptic).
    pub distance: f64,
    /// Rectangular ecliptic coordinates.
    pub ecliptic: Vector3<f64>,
    pub heliocentric_longitude: Degree,
    pub ecliptic_latitude: Degree,
    pub geocentric_longitude: Option<Degree>,
    pub zodiac: Option<ZodiacPlacement>,
}

impl BodyState {
    /// Blank state of a body that has not been computed yet.
    pub fn unsolved(body: Body) -> Self {
        BodyState {
            body,
            day: None,
            mean_longitude: 0.0,
            eccentric_anomaly: 0.0,
            true_anomaly: 0.0,
            distance: 0.0,
            ecliptic: Vector3::zeros(),
            heliocentric_longitude: 0.0,
            ecliptic_latitude: 0.0,
            geocentric_longitude: None,
            zodiac: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        self.zodiac.map(|z| z.sign)
    }

    /// 1-based zodiac index, when a placement was computed.
    pub fn zodiac_index(&self) -> Option<u8> {
        self.zodiac.map(|z| z.index())
    }

    /// Degrees into the zodiac sign, when a placement was computed.
    pub fn zodiac_angle(&self) -> Option<Degree> {
        self.zodiac.map(|z| z.angle)
    }
}

impl fmt::Display for BodyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (H) {:.2}°,(G) ", self.body, self.heliocentric_longitude)?;
        match self.zodiac {
            Some(placement) => write!(f, "{placement}"),
            None => f.write_str("-"),
        }
    }
}
