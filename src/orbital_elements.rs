//! # Mean orbital elements with linear drift
//!
//! This module defines [`OrbitalElementSet`], the immutable per-body reference of
//! the six Keplerian elements at epoch together with their daily drift rates,
//! and [`MeanElements`], the snapshot obtained by propagating a set to a given
//! day number.
//!
//! ## Elements
//!
//! | Symbol | Field | Unit |
//! |---|---|---|
//! | N | `ascending_node` | degrees |
//! | i | `inclination` | degrees |
//! | w | `perihelion` | degrees |
//! | a | `semi_major_axis` | AU (Moon: Earth radii) |
//! | e | `eccentricity` | unitless |
//! | M | `mean_anomaly` | degrees |
//!
//! Every element is a [`LinearElement`]: `value(d) = at_epoch + per_day·d`.
//! After propagation `w` and `M` are reduced to `[0, 360)` and the mean
//! longitude `L = w + M` is derived, also reduced. `N` and `i` are left as is
//! because they only enter the solver through trigonometric functions.
//!
//! The constant table reproduces the simplified J2000 elements published by
//! P. Schlyter, *Computing planetary positions*.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    body::Body,
    constants::{AstronomicalUnit, DayNumber, Degree},
    kepler::wrap360,
    orrery_errors::OrreryError,
};

/// One orbital element, linear in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearElement {
    pub at_epoch: f64,
    pub per_day: f64,
}

impl LinearElement {
    pub const fn new(at_epoch: f64, per_day: f64) -> Self {
        Self { at_epoch, per_day }
    }

    /// An element without drift.
    pub const fn fixed(at_epoch: f64) -> Self {
        Self {
            at_epoch,
            per_day: 0.0,
        }
    }

    /// Value of the element `day` days after the epoch.
    #[inline]
    pub fn at(&self, day: DayNumber) -> f64 {
        self.at_epoch + self.per_day * day
    }
}

/// Keplerian elements at epoch with their daily drift rates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrbitalElementSet {
    pub ascending_node: LinearElement,
    pub inclination: LinearElement,
    pub perihelion: LinearElement,
    pub semi_major_axis: LinearElement,
    pub eccentricity: LinearElement,
    pub mean_anomaly: LinearElement,
}

/// Elements of one body propagated to a given day number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanElements {
    pub day: DayNumber,
    pub ascending_node: Degree,
    pub inclination: Degree,
    pub perihelion: Degree,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub mean_anomaly: Degree,
    pub mean_longitude: Degree,
}

impl OrbitalElementSet {
    /// Propagate every element linearly to `day`.
    ///
    /// Arguments
    /// ---------
    /// * `day` – day number relative to the model epoch (see [`crate::time::day_number`]).
    /// * `semi_major_axis_drift` – apply the `a′` rate. Only Uranus and Neptune carry one.
    ///
    /// Return
    /// ------
    /// * The [`MeanElements`] at `day`, with `w`, `M` and `L` in `[0, 360)`.
    pub fn propagate(&self, day: DayNumber, semi_major_axis_drift: bool) -> MeanElements {
        let perihelion = wrap360(self.perihelion.at(day));
        let mean_anomaly = wrap360(self.mean_anomaly.at(day));
        let semi_major_axis = if semi_major_axis_drift {
            self.semi_major_axis.at(day)
        } else {
            self.semi_major_axis.at_epoch
        };

        MeanElements {
            day,
            ascending_node: self.ascending_node.at(day),
            inclination: self.inclination.at(day),
            perihelion,
            semi_major_axis,
            eccentricity: self.eccentricity.at(day),
            mean_anomaly,
            mean_longitude: wrap360(perihelion + mean_anomaly),
        }
    }

    /// Check the `0 ≤ e < max_eccentricity` precondition at epoch.
    ///
    /// The fixed table always passes with the default bound of 1; custom
    /// element sets should be checked before being handed to the solver,
    /// since `e ≥ 1` turns the Kepler correction and `√(1−e²)` into NaN.
    pub fn validate(&self, body: Body, max_eccentricity: f64) -> Result<(), OrreryError> {
        let e = self.eccentricity.at_epoch;
        if !(0.0..max_eccentricity).contains(&e) {
            tracing::warn!(%body, eccentricity = e, max_eccentricity, "element set rejected");
            return Err(OrreryError::EccentricityOutOfRange {
                body,
                eccentricity: e,
                max: max_eccentricity,
            });
        }
        Ok(())
    }
}

impl fmt::Display for OrbitalElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("N   (ascending node)  ", &self.ascending_node, "°"),
            ("i   (inclination)     ", &self.inclination, "°"),
            ("w   (perihelion)      ", &self.perihelion, "°"),
            ("a   (semi-major axis) ", &self.semi_major_axis, ""),
            ("e   (eccentricity)    ", &self.eccentricity, ""),
            ("M   (mean anomaly)    ", &self.mean_anomaly, "°"),
        ];
        writeln!(f, "Orbital elements @ J2000 (value + rate·d)")?;
        writeln!(f, "-----------------------------------------")?;
        for (label, element, unit) in rows {
            writeln!(
                f,
                "  {label}= {:.6}{unit} {:+.10e}{unit}/day",
                element.at_epoch, element.per_day
            )?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------
// Constant table
// -------------------------------------------------------------------------------------------------

const fn elements(
    node: (f64, f64),
    incl: (f64, f64),
    peri: (f64, f64),
    axis: (f64, f64),
    ecc: (f64, f64),
    anomaly: (f64, f64),
) -> OrbitalElementSet {
    OrbitalElementSet {
        ascending_node: LinearElement::new(node.0, node.1),
        inclination: LinearElement::new(incl.0, incl.1),
        perihelion: LinearElement::new(peri.0, peri.1),
        semi_major_axis: LinearElement::new(axis.0, axis.1),
        eccentricity: LinearElement::new(ecc.0, ecc.1),
        mean_anomaly: LinearElement::new(anomaly.0, anomaly.1),
    }
}

/// The Sun's apparent orbit around the Earth.
pub const SUN: OrbitalElementSet = elements(
    (0.0, 0.0),
    (0.0, 0.0),
    (282.9404, 4.70935E-5),
    (1.0, 0.0),
    (0.016709, -1.151E-9),
    (356.0470, 0.9856002585),
);

pub const MERCURY: OrbitalElementSet = elements(
    (48.3313, 3.24587E-5),
    (7.0047, 5.00E-8),
    (29.1241, 1.01444E-5),
    (0.387098, 0.0),
    (0.205635, 5.59E-10),
    (168.6562, 4.0923344368),
);

pub const VENUS: OrbitalElementSet = elements(
    (76.6799, 2.46590E-5),
    (3.3946, 2.75E-8),
    (54.8910, 1.38374E-5),
    (0.723330, 0.0),
    (0.006773, -1.302E-9),
    (48.0052, 1.6021302244),
);

pub const MARS: OrbitalElementSet = elements(
    (49.5574, 2.11081E-5),
    (1.8497, -1.78E-8),
    (286.5016, 2.92961E-5),
    (1.523688, 0.0),
    (0.093405, 2.516E-9),
    (18.6021, 0.5240207766),
);

pub const JUPITER: OrbitalElementSet = elements(
    (100.4542, 2.76854E-5),
    (1.3030, -1.557E-7),
    (273.8777, 1.64505E-5),
    (5.20256, 0.0),
    (0.048498, 4.469E-9),
    (19.8950, 0.0830853001),
);

pub const SATURN: OrbitalElementSet = elements(
    (113.6634, 2.38980E-5),
    (2.4886, -1.081E-7),
    (339.3939, 2.97661E-5),
    (9.55475, 0.0),
    (0.055546, -9.499E-9),
    (316.9670, 0.0334442282),
);

pub const URANUS: OrbitalElementSet = elements(
    (74.0005, 1.3978E-5),
    (0.7733, 1.9E-8),
    (96.6612, 3.0565E-5),
    (19.18171, -1.55E-8),
    (0.047318, 7.45E-9),
    (142.5905, 0.011725806),
);

pub const NEPTUNE: OrbitalElementSet = elements(
    (131.7806, 3.0173E-5),
    (1.7700, -2.55E-7),
    (272.8461, -6.027E-6),
    (30.05826, 3.313E-8),
    (0.008606, 2.15E-9),
    (260.2471, 0.005995147),
);

/// Geocentric lunar orbit; the semi-major axis is in Earth radii.
pub const MOON: OrbitalElementSet = elements(
    (125.1228, -0.0529538083),
    (5.1454, 0.0),
    (318.0634, 0.1643573223),
    (60.2666, 0.0),
    (0.0549, 0.0),
    (115.3654, 13.0649929509),
);
