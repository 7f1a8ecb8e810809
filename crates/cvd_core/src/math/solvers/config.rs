//! Solver configuration.

use num_traits::Float;

use super::SolverError;

/// Configuration shared by iterative solvers.
///
/// # Examples
/// ```
/// use cvd_core::math::solvers::SolverConfig;
///
/// let config = SolverConfig::<f64>::default();
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float = f64> {
    /// Absolute convergence tolerance on the root
    pub tolerance: T,
    /// Maximum iteration count
    pub max_iterations: usize,
}

impl<T: Float> SolverConfig<T> {
    /// Create a configuration with explicit tolerance and iteration cap.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Check that the tolerance is positive and finite and the cap non-zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > T::zero()) || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(
                "tolerance must be positive and finite".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl<T: Float> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}
