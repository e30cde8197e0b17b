//! # Kepler's equation and orbital-plane geometry
//!
//! Angle helpers and the fixed-cost Kepler solver used by the
//! [`PositionSolver`](crate::solver::PositionSolver).
//!
//! All angles are in **degrees** unless a function name says otherwise.
//! Degree/radian conversions use the model's own turn value
//! ([`TURN`](crate::constants::TURN)) and keep the multiplication order of the
//! reference run (`x·π/180`, `atan2(y, x)/2π·360`).
//!
//! ## Eccentric anomaly
//!
//! The solver starts from the first-order seed
//!
//! ```text
//! E₀ = M + (180/π)·e·sin(M)·(1 + e·cos(M))
//! ```
//!
//! and applies Newton corrections
//!
//! ```text
//! E ← E − (E − (180/π)·e·sin(E) − M) / (1 − e·cos(E))
//! ```
//!
//! The reference model applies exactly **one** correction. Accuracy degrades
//! with eccentricity (Mercury, Mars); more corrections can be requested through
//! [`SolverParams::kepler_corrections`](crate::params::SolverParams::kepler_corrections),
//! at the cost of parity with published outputs.

use crate::constants::{Degree, Radian, FULL_CIRCLE, HALF_TURN, TURN};

/// Degrees per radian in the model's angle convention.
const DEGREES_PER_RADIAN: f64 = 180.0 / HALF_TURN;

/// Reduce an angle to `[0, 360)`.
///
/// `x − floor(x/360)·360`, with two guards: a negative remainder gets 360
/// added, and a remainder of exactly 360 (reached for tiny negative inputs
/// such as `-1e-20`) folds back to 0. The second guard keeps the function
/// idempotent over every finite input.
///
/// Past about `1e16` the floor formula loses every significant digit and can
/// land far outside the circle. Those inputs fall back to `rem_euclid`, so
/// ordinary angles keep the exact floor-formula result.
///
/// Arguments
/// ---------
/// * `x` – any finite angle in degrees.
///
/// Return
/// ------
/// * The equivalent angle in `[0, 360)`.
pub fn wrap360(x: Degree) -> Degree {
    let mut rv = x - (x / FULL_CIRCLE).floor() * FULL_CIRCLE;
    if rv < 0.0 {
        rv += FULL_CIRCLE;
    }
    if rv >= FULL_CIRCLE {
        rv -= FULL_CIRCLE;
    }
    if !(0.0..FULL_CIRCLE).contains(&rv) {
        rv = x.rem_euclid(FULL_CIRCLE);
        if rv >= FULL_CIRCLE {
            rv = 0.0;
        }
    }
    rv
}

/// Degrees → radians, as `x·π/180`.
#[inline]
pub fn radians(x: Degree) -> Radian {
    x * HALF_TURN / 180.0
}

/// Direction of the vector `(x, y)` in degrees, reduced to `[0, 360)`.
#[inline]
pub fn longitude_of(y: f64, x: f64) -> Degree {
    wrap360(y.atan2(x) / TURN * FULL_CIRCLE)
}

/// Elevation of a 3-D vector above the `xy` plane, in degrees (`[-90, 90]`).
#[inline]
pub fn latitude_of(x: f64, y: f64, z: f64) -> Degree {
    z.atan2((x * x + y * y).sqrt()) / TURN * FULL_CIRCLE
}

/// First-order approximation of the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly` – M in degrees.
/// * `eccentricity` – e, unitless.
pub fn seed_eccentric_anomaly(mean_anomaly: Degree, eccentricity: f64) -> Degree {
    let m_rad = radians(mean_anomaly);
    mean_anomaly
        + DEGREES_PER_RADIAN * eccentricity * m_rad.sin() * (1.0 + eccentricity * m_rad.cos())
}

/// Size of one Newton step on Kepler's equation, in degrees.
///
/// The corrected anomaly is `eccentric_anomaly - kepler_step(..)`.
#[inline]
fn kepler_step(eccentric_anomaly: Degree, mean_anomaly: Degree, eccentricity: f64) -> Degree {
    let e_rad = radians(eccentric_anomaly);
    (eccentric_anomaly - eccentricity * DEGREES_PER_RADIAN * e_rad.sin() - mean_anomaly)
        / (1.0 - eccentricity * e_rad.cos())
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly` – M in degrees.
/// * `eccentricity` – e, precondition `0 ≤ e < 1`.
/// * `corrections` – number of Newton corrections applied after the seed.
///   `1` reproduces the reference model; `0` is treated as `1`.
/// * `tolerance` – stop early once a correction is smaller than this (degrees).
///   `0.0` disables the early exit.
///
/// Return
/// ------
/// * The eccentric anomaly E in degrees (not reduced to `[0, 360)`).
///
/// Notes
/// -----
/// * For `e = 0` both the seed and every correction vanish, so `E == M` exactly.
pub fn solve_eccentric_anomaly(
    mean_anomaly: Degree,
    eccentricity: f64,
    corrections: u32,
    tolerance: Degree,
) -> Degree {
    let mut e_anom = seed_eccentric_anomaly(mean_anomaly, eccentricity);
    for _ in 0..corrections.max(1) {
        let delta = kepler_step(e_anom, mean_anomaly, eccentricity);
        e_anom -= delta;
        if delta.abs() < tolerance {
            break;
        }
    }
    e_anom
}

/// Rectangular coordinates in the orbital plane, perihelion along `+x`.
///
/// `x = a·(cos E − e)`, `y = a·sin E·√(1−e²)`.
pub fn orbital_plane_position(
    semi_major_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: Degree,
) -> (f64, f64) {
    let e_rad = radians(eccentric_anomaly);
    let x = semi_major_axis * (e_rad.cos() - eccentricity);
    let y = semi_major_axis * (e_rad.sin() * (1.0 - eccentricity * eccentricity).sqrt());
    (x, y)
}

/// Distance from the focus and true anomaly (degrees) of an orbital-plane point.
pub fn distance_and_true_anomaly(x: f64, y: f64) -> (f64, Degree) {
    ((x * x + y * y).sqrt(), longitude_of(y, x))
}
