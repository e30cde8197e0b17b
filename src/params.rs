//! # Solver parameters
//!
//! [`SolverParams`] gathers the few knobs of the
//! [`PositionSolver`](crate::solver::PositionSolver). The defaults reproduce the
//! reference model exactly; every other setting trades parity for something
//! else (precision, a stricter eccentricity guard).
//!
//! ## Example
//!
//! ```rust
//! use zodiac_orrery::params::SolverParams;
//!
//! let params = SolverParams::builder()
//!     .kepler_corrections(4)
//!     .kepler_tolerance(1e-10)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.kepler_corrections, 4);
//! ```

use std::cmp::Ordering::{Equal, Greater, Less};

use serde::{Deserialize, Serialize};

use crate::orrery_errors::OrreryError;

/// Configuration of the position solver.
///
/// Defaults
/// --------
/// * `kepler_corrections`: 1 (reference model)
/// * `kepler_tolerance`: 0.0 (never stop early)
/// * `semi_major_axis_drift`: true
/// * `max_eccentricity`: 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// Newton corrections applied after the first-order seed of Kepler's equation.
    pub kepler_corrections: u32,
    /// Stop correcting once a step is smaller than this, in degrees. `0.0` disables it.
    pub kepler_tolerance: f64,
    /// Apply the daily drift of the semi-major axis.
    pub semi_major_axis_drift: bool,
    /// Exclusive upper bound on the eccentricity of every element set.
    pub max_eccentricity: f64,
}

impl SolverParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SolverParamsBuilder {
        SolverParamsBuilder::new()
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        SolverParams {
            kepler_corrections: 1,
            kepler_tolerance: 0.0,
            semi_major_axis_drift: true,
            max_eccentricity: 1.0,
        }
    }
}

/// Builder for [`SolverParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct SolverParamsBuilder {
    params: SolverParams,
}

impl SolverParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: SolverParams::default(),
        }
    }

    pub fn kepler_corrections(mut self, v: u32) -> Self {
        self.params.kepler_corrections = v;
        self
    }
    pub fn kepler_tolerance(mut self, v: f64) -> Self {
        self.params.kepler_tolerance = v;
        self
    }
    pub fn semi_major_axis_drift(mut self, v: bool) -> Self {
        self.params.semi_major_axis_drift = v;
        self
    }
    pub fn max_eccentricity(mut self, v: f64) -> Self {
        self.params.max_eccentricity = v;
        self
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Return true iff 0 < x <= 1 (NaN rejected).
    #[inline]
    fn in_unit_interval(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater) && matches!(x.partial_cmp(&1.0), Some(Less) | Some(Equal))
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// ----------------
    /// * `kepler_corrections ≥ 1`
    /// * `kepler_tolerance ≥ 0` and finite
    /// * `0 < max_eccentricity ≤ 1`
    pub fn build(self) -> Result<SolverParams, OrreryError> {
        let p = &self.params;

        let failure = if p.kepler_corrections == 0 {
            Some("kepler_corrections must be >= 1")
        } else if !Self::ge0(p.kepler_tolerance) || !p.kepler_tolerance.is_finite() {
            Some("kepler_tolerance must be finite and >= 0")
        } else if !Self::in_unit_interval(p.max_eccentricity) {
            Some("max_eccentricity must be in (0, 1]")
        } else {
            None
        };

        match failure {
            Some(reason) => {
                tracing::warn!(reason, "solver parameters rejected");
                Err(OrreryError::InvalidSolverParameter(reason.into()))
            }
            None => Ok(self.params),
        }
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_defaults_reproduce_reference_model() {
        let params = SolverParams::builder().build().unwrap();
        assert_eq!(params, SolverParams::default());
        assert_eq!(params.kepler_corrections, 1);
        assert_eq!(params.kepler_tolerance, 0.0);
        assert!(params.semi_major_axis_drift);
        assert_eq!(params.max_eccentricity, 1.0);
    }

    #[test]
    fn test_builder_overrides() {
        let params = SolverParams::builder()
            .kepler_corrections(3)
            .kepler_tolerance(1e-9)
            .semi_major_axis_drift(false)
            .max_eccentricity(0.5)
            .build()
            .unwrap();
        assert_eq!(params.kepler_corrections, 3);
        assert_eq!(params.kepler_tolerance, 1e-9);
        assert!(!params.semi_major_axis_drift);
        assert_eq!(params.max_eccentricity, 0.5);
    }

    #[test]
    fn test_invalid_parameters() {
        let zero_corrections = SolverParams::builder().kepler_corrections(0).build();
        assert_eq!(
            zero_corrections,
            Err(OrreryError::InvalidSolverParameter(
                "kepler_corrections must be >= 1".into()
            ))
        );

        assert!(SolverParams::builder().kepler_tolerance(-1.0).build().is_err());
        assert!(SolverParams::builder()
            .kepler_tolerance(f64::NAN)
            .build()
            .is_err());
        assert!(SolverParams::builder()
            .kepler_tolerance(f64::INFINITY)
            .build()
            .is_err());
        assert!(SolverParams::builder().max_eccentricity(0.0).build().is_err());
        assert!(SolverParams::builder().max_eccentricity(1.5).build().is_err());
        assert!(SolverParams::builder()
            .max_eccentricity(f64::NAN)
            .build()
            .is_err());
    }
}
