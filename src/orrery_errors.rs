use thiserror::Error;

use crate::body::Body;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("Invalid solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Eccentricity of {body} out of range: {eccentricity} (expected 0 <= e < {max})")]
    EccentricityOutOfRange {
        body: Body,
        eccentricity: f64,
        max: f64,
    },

    #[error("Unknown zodiac index: {0} (expected 1..=12)")]
    UnknownZodiacIndex(u8),

    #[error("Unknown body name: {0}")]
    UnknownBody(String),

    #[error("Unknown body index: {0} (expected 0..10)")]
    UnknownBodyIndex(usize),
}
