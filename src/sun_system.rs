//! # Sun system aggregator
//!
//! [`SunSystem`] owns the ten [`BodyState`]s of the model, in [`Body::ALL`]
//! order, and refreshes them for a requested day number:
//!
//! 1. every body with an element set is solved heliocentrically,
//! 2. Mercury … Neptune (slots 1 to 8, Earth excluded) are shifted by the
//!    Sun's vector to obtain geocentric longitudes and zodiac placements,
//! 3. the Earth's slot receives the mirror image of the Sun's vector.
//!
//! Each run overwrites every state; running twice with the same day gives
//! identical results.
//!
//! ## Concurrency
//!
//! [`SunSystem::calculate`] takes `&mut self`, so concurrent refreshes of one
//! instance are ruled out at compile time. Readers can share a `&SunSystem`
//! across threads, or call [`SunSystem::positions`] which computes a fresh
//! snapshot without touching the stored states.
//!
//! ## Example
//!
//! ```rust
//! use zodiac_orrery::{body::Body, sun_system::SunSystem, time::day_number};
//!
//! let mut system = SunSystem::new();
//! system.calculate(day_number(9, 9, 1990));
//!
//! let sun = system.body(Body::Sun);
//! assert_eq!(sun.zodiac_index(), Some(6));
//! ```

use std::fmt;

use crate::{
    body::Body,
    body_state::BodyState,
    constants::{DayNumber, BODY_COUNT},
    orrery_errors::OrreryError,
    params::SolverParams,
    solver::PositionSolver,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SunSystem {
    solver: PositionSolver,
    states: [BodyState; BODY_COUNT],
    day: Option<DayNumber>,
}

impl Default for SunSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SunSystem {
    /// A system seeded with the constant element table and the reference
    /// solver parameters. No day has been computed yet.
    pub fn new() -> Self {
        Self::from_solver(PositionSolver::default())
    }

    /// A system using custom solver parameters.
    ///
    /// Every element set of the table is checked against
    /// `params.max_eccentricity` before the system is built.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::EccentricityOutOfRange`] if a body breaks the bound.
    pub fn with_params(params: SolverParams) -> Result<Self, OrreryError> {
        for body in Body::ALL {
            if let Some(elements) = body.elements() {
                elements.validate(body, params.max_eccentricity)?;
            }
        }
        Ok(Self::from_solver(PositionSolver::new(params)))
    }

    fn from_solver(solver: PositionSolver) -> Self {
        SunSystem {
            solver,
            states: Body::ALL.map(BodyState::unsolved),
            day: None,
        }
    }

    pub fn params(&self) -> &SolverParams {
        self.solver.params()
    }

    /// Day number of the last [`SunSystem::calculate`] call.
    pub fn day(&self) -> Option<DayNumber> {
        self.day
    }

    /// Recompute every body for `day`, overwriting the stored states.
    pub fn calculate(&mut self, day: DayNumber) {
        tracing::debug!(day, "calculating sun system");
        self.states = self.positions(day);
        self.day = Some(day);
    }

    /// Compute the states of every body for `day` without storing them.
    pub fn positions(&self, day: DayNumber) -> [BodyState; BODY_COUNT] {
        let mut states = Body::ALL.map(|body| match body.elements() {
            Some(elements) => self.solver.solve(body, elements, day),
            None => BodyState::unsolved(body),
        });

        let sun = states[Body::Sun.index()].ecliptic;
        for body in Body::GEOCENTRIC_PLANETS {
            PositionSolver::derive_geocentric(&mut states[body.index()], &sun);
        }
        states[Body::Earth.index()] = PositionSolver::mirror_earth(&states[Body::Sun.index()]);

        states
    }

    pub fn body(&self, body: Body) -> &BodyState {
        &self.states[body.index()]
    }

    pub fn body_at(&self, index: usize) -> Result<&BodyState, OrreryError> {
        self.states
            .get(index)
            .ok_or(OrreryError::UnknownBodyIndex(index))
    }

    /// Look a body up by its English name, ignoring case.
    pub fn body_by_name(&self, name: &str) -> Result<&BodyState, OrreryError> {
        Ok(self.body(name.parse()?))
    }

    pub fn bodies(&self) -> &[BodyState; BODY_COUNT] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.states.iter()
    }
}

impl<'a> IntoIterator for &'a SunSystem {
    type Item = &'a BodyState;
    type IntoIter = std::slice::Iter<'a, BodyState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl fmt::Display for SunSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => writeln!(f, "Sun system @ day {day}")?,
            None => writeln!(f, "Sun system (not calculated)")?,
        }
        for state in &self.states {
            writeln!(f, "  {state}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod sun_system_test {
    use super::*;
    use crate::orbital_elements::MERCURY;

    #[test]
    fn test_new_system_is_blank() {
        let system = SunSystem::new();
        assert_eq!(system.day(), None);
        assert_eq!(system.params(), &SolverParams::default());
        for (state, body) in system.iter().zip(Body::ALL) {
            assert_eq!(state, &BodyState::unsolved(body));
        }
    }

    #[test]
    fn test_earth_never_gets_geocentric_fields() {
        let mut system = SunSystem::new();
        for day in [-3400.0, 0.0, 12_345.5] {
            system.calculate(day);
            let earth = system.body(Body::Earth);
            assert_eq!(earth.geocentric_longitude, None);
            assert_eq!(earth.zodiac, None);
        }
    }

    #[test]
    fn test_calculate_is_not_cumulative() {
        let mut system = SunSystem::new();
        system.calculate(100.0);
        let first = system.bodies().clone();

        system.calculate(-5000.0);
        system.calculate(100.0);
        assert_eq!(system.bodies(), &first);
        assert_eq!(system.day(), Some(100.0));
    }

    #[test]
    fn test_positions_does_not_mutate() {
        let system = SunSystem::new();
        let snapshot = system.positions(42.0);
        assert_eq!(system.day(), None);
        assert_eq!(snapshot[Body::Mars.index()].day, Some(42.0));

        let mut calculated = SunSystem::new();
        calculated.calculate(42.0);
        assert_eq!(calculated.bodies(), &snapshot);
    }

    #[test]
    fn test_lookups() {
        let mut system = SunSystem::new();
        system.calculate(0.0);

        assert_eq!(system.body_by_name("saturn").unwrap().body, Body::Saturn);
        assert_eq!(
            system.body_by_name("Vulcan"),
            Err(OrreryError::UnknownBody("Vulcan".into()))
        );
        assert_eq!(system.body_at(9).unwrap().body, Body::Moon);
        assert_eq!(system.body_at(10), Err(OrreryError::UnknownBodyIndex(10)));
        assert_eq!((&system).into_iter().count(), BODY_COUNT);
    }

    #[test]
    fn test_with_params_validates_table() {
        let strict = SolverParams::builder().max_eccentricity(0.1).build().unwrap();
        assert_eq!(
            SunSystem::with_params(strict),
            Err(OrreryError::EccentricityOutOfRange {
                body: Body::Mercury,
                eccentricity: MERCURY.eccentricity.at_epoch,
                max: 0.1,
            })
        );

        let refined = SolverParams::builder().kepler_corrections(3).build().unwrap();
        let system = SunSystem::with_params(refined).unwrap();
        assert_eq!(system.params().kepler_corrections, 3);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SunSystem>();

        let mut system = SunSystem::new();
        system.calculate(-3400.0);
        let system = std::sync::Arc::new(system);
        let reader = {
            let system = std::sync::Arc::clone(&system);
            std::thread::spawn(move || system.body(Body::Sun).zodiac_index())
        };
        assert_eq!(reader.join().unwrap(), Some(6));
    }

    #[test]
    fn test_display_lists_every_body() {
        let mut system = SunSystem::new();
        assert!(system.to_string().contains("not calculated"));

        system.calculate(-3400.0);
        let text = system.to_string();
        assert!(text.starts_with("Sun system @ day -3400"));
        for body in Body::ALL {
            assert!(text.contains(body.name()));
        }
    }
}
