//! Model error types.

use thiserror::Error;

use crate::math::solvers::SolverError;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, CvdError>;

/// Errors raised by the Callendar-Van Dusen model.
///
/// # Variants
/// - `UnknownStandard`: the standard name is not one of the recognised set
/// - `InvalidInput`: non-physical input (non-positive r0, non-finite values)
/// - `NoSolution`: the reading has no root inside the rated range
/// - `Solver`: the root finder failed for a reason other than bracketing
///
/// # Examples
/// ```
/// use cvd_core::{CallendarVanDusen, CvdError};
///
/// let err = CallendarVanDusen::from_name("Foo", false).unwrap_err();
/// assert!(matches!(err, CvdError::UnknownStandard(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CvdError {
    /// Unrecognised calibration standard
    #[error("Configuration error: unknown standard '{0}' (expected one of DIN43760, American, ITS-90)")]
    UnknownStandard(String),

    /// Non-physical input
    #[error("Domain error: {0}")]
    InvalidInput(String),

    /// No root of the polynomial lies in the rated range
    #[error("No solution for r = {resistance} ohm (r0 = {r0} ohm): {reason}")]
    NoSolution {
        resistance: f64,
        r0: f64,
        reason: String,
    },

    /// Root finder failure
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl CvdError {
    /// True for errors caused by bad inputs rather than out-of-range readings.
    pub fn is_domain(&self) -> bool {
        matches!(self, CvdError::InvalidInput(_))
    }
}
