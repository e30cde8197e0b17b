//! # Position solver
//!
//! Turns an [`OrbitalElementSet`] and a day number into a [`BodyState`]:
//!
//! 1. propagate the elements linearly ([`OrbitalElementSet::propagate`]),
//! 2. solve Kepler's equation for `E` ([`solve_eccentric_anomaly`]),
//! 3. place the body in its orbital plane and get `(r, v)`,
//! 4. rotate by node `N`, inclination `i` and argument `v + w` into the ecliptic,
//! 5. read off the heliocentric longitude and latitude.
//!
//! Planets are scaled by the semi-major axis `a` in step 4, the Moon by its
//! instantaneous radius `r`; the Moon's radius is then recomputed from the
//! rotated vector. The two branches give different numbers and must stay
//! separate.
//!
//! [`PositionSolver::derive_geocentric`] then shifts a planet by the Sun's
//! vector. The Sun's element set describes its apparent orbit around the Earth,
//! so `planet + sun` is the planet seen from the Earth.

use nalgebra::Vector3;

use crate::{
    body::{Body, BodyKind},
    body_state::BodyState,
    constants::{DayNumber, Degree},
    kepler::{
        distance_and_true_anomaly, latitude_of, longitude_of, orbital_plane_position, radians,
        solve_eccentric_anomaly, wrap360,
    },
    orbital_elements::OrbitalElementSet,
    params::SolverParams,
    zodiac::ZodiacPlacement,
};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionSolver {
    params: SolverParams,
}

impl PositionSolver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Heliocentric state of `body` at `day`.
    ///
    /// Arguments
    /// ---------
    /// * `body` – selects the solver branch (Moon vs. everything else) and
    ///   whether zodiac fields are filled right away (Sun and Moon only).
    /// * `elements` – the body's element set, `0 ≤ e < 1` assumed.
    /// * `day` – day number relative to the model epoch.
    ///
    /// Return
    /// ------
    /// * A fresh [`BodyState`]. For planets `geocentric_longitude` and `zodiac`
    ///   are `None` until [`PositionSolver::derive_geocentric`] runs.
    pub fn solve(&self, body: Body, elements: &OrbitalElementSet, day: DayNumber) -> BodyState {
        let mean = elements.propagate(day, self.params.semi_major_axis_drift);

        let eccentric_anomaly = solve_eccentric_anomaly(
            mean.mean_anomaly,
            mean.eccentricity,
            self.params.kepler_corrections,
            self.params.kepler_tolerance,
        );
        let (x, y) =
            orbital_plane_position(mean.semi_major_axis, mean.eccentricity, eccentric_anomaly);
        let (r, true_anomaly) = distance_and_true_anomaly(x, y);

        let is_moon = body.kind() == BodyKind::Moon;
        let scale = if is_moon { r } else { mean.semi_major_axis };
        let ecliptic = to_ecliptic(
            scale,
            mean.ascending_node,
            mean.inclination,
            true_anomaly,
            mean.perihelion,
        );

        let longitude = longitude_of(ecliptic.y, ecliptic.x);
        let distance = if is_moon {
            (ecliptic.x * ecliptic.x + ecliptic.y * ecliptic.y + ecliptic.z * ecliptic.z).sqrt()
        } else {
            r
        };

        let (geocentric_longitude, zodiac) = match body.kind() {
            BodyKind::Sun | BodyKind::Moon => {
                (Some(longitude), Some(ZodiacPlacement::from_longitude(longitude)))
            }
            BodyKind::Planet | BodyKind::Earth => (None, None),
        };

        tracing::trace!(
            %body,
            day,
            heliocentric_longitude = longitude,
            eccentric_anomaly,
            "body solved"
        );

        BodyState {
            body,
            day: Some(day),
            mean_longitude: mean.mean_longitude,
            eccentric_anomaly,
            true_anomaly,
            distance,
            ecliptic,
            heliocentric_longitude: longitude,
            ecliptic_latitude: latitude_of(ecliptic.x, ecliptic.y, ecliptic.z),
            geocentric_longitude,
            zodiac,
        }
    }

    /// Shift a planet's heliocentric vector by the Sun's and derive its
    /// geocentric longitude and zodiac placement.
    ///
    /// Only the `x` and `y` components take part; the longitude does not
    /// depend on `z`.
    pub fn derive_geocentric(state: &mut BodyState, sun: &Vector3<f64>) {
        let xg = state.ecliptic.x + sun.x;
        let yg = state.ecliptic.y + sun.y;

        let geocentric = longitude_of(yg, xg);
        state.geocentric_longitude = Some(geocentric);
        state.zodiac = Some(ZodiacPlacement::from_longitude(geocentric));

        tracing::trace!(body = %state.body, geocentric_longitude = geocentric, "geocentric shift");
    }

    /// Earth's heliocentric state, the mirror image of the Sun's apparent one.
    ///
    /// No geocentric longitude or zodiac placement is produced for the Earth.
    /// Drivers that leave the Earth at the origin report a heliocentric
    /// longitude of 0 for it; this one reports the Sun's longitude + 180.
    pub fn mirror_earth(sun: &BodyState) -> BodyState {
        let ecliptic = -sun.ecliptic;
        BodyState {
            body: Body::Earth,
            day: sun.day,
            mean_longitude: wrap360(sun.mean_longitude + 180.0),
            eccentric_anomaly: sun.eccentric_anomaly,
            true_anomaly: sun.true_anomaly,
            distance: sun.distance,
            ecliptic,
            heliocentric_longitude: longitude_of(ecliptic.y, ecliptic.x),
            ecliptic_latitude: -sun.ecliptic_latitude,
            geocentric_longitude: None,
            zodiac: None,
        }
    }
}

/// Rotate an orbital-plane position into ecliptic rectangular coordinates.
///
/// ```text
/// x = s·(cos N·cos(v+w) − sin N·sin(v+w)·cos i)
/// y = s·(sin N·cos(v+w) + cos N·sin(v+w)·cos i)
/// z = s·sin(v+w)·sin i
/// ```
fn to_ecliptic(
    scale: f64,
    ascending_node: Degree,
    inclination: Degree,
    true_anomaly: Degree,
    perihelion: Degree,
) -> Vector3<f64> {
    let node = radians(ascending_node);
    let incl = radians(inclination);
    let arg = radians(true_anomaly) + radians(perihelion);

    Vector3::new(
        scale * (node.cos() * arg.cos() - node.sin() * arg.sin() * incl.cos()),
        scale * (node.sin() * arg.cos() + node.cos() * arg.sin() * incl.cos()),
        scale * (arg.sin() * incl.sin()),
    )
}
