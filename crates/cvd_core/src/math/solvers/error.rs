//! Solver errors.

use thiserror::Error;

/// Errors that can occur while locating a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The function does not change sign over the interval
    #[error("Root not bracketed: f({a}) = {fa}, f({b}) = {fb}")]
    NoBracket { a: f64, b: f64, fa: f64, fb: f64 },

    /// Convergence failure
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded { iterations: usize },

    /// Invalid solver configuration
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    /// The quadratic has no real roots
    #[error("Negative discriminant: {0}")]
    NegativeDiscriminant(f64),

    /// Both linear and quadratic coefficients vanish
    #[error("Degenerate polynomial: leading coefficients are zero")]
    Degenerate,
}
