use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MsmError {
    #[error("length mismatch: {points} points, {scalars} scalars")]
    LengthMismatch { points: usize, scalars: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("scalar #{index} has {bits} significant bits, the instance allows {max}")]
    ScalarOutOfRange { index: usize, bits: usize, max: usize },

    #[error("degenerate cost: the speedup denominator is zero")]
    DegenerateCost,

    #[error("naive and windowed MSM results differ")]
    ResultMismatch,
}

pub type Result<T> = core::result::Result<T, MsmError>;
