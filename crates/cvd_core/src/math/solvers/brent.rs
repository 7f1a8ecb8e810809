//! Brent's bracketing root finder.

use num_traits::Float;
use tracing::trace;

use super::{SolverConfig, SolverError};

/// Brent's method: inverse quadratic interpolation guarded by bisection.
///
/// Requires a bracket `[a, b]` with `f(a)` and `f(b)` of opposite sign and
/// never leaves it, so the returned root always lies inside the bracket.
#[derive(Debug, Clone, Copy)]
pub struct BrentSolver<T: Float = f64> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` inside `[a, b]`.
    ///
    /// # Errors
    /// - `SolverError::InvalidConfig` if the configuration fails validation
    /// - `SolverError::NoBracket` if `f(a)` and `f(b)` share a sign
    /// - `SolverError::MaxIterationsExceeded` if the tolerance is not met
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.config.validate()?;

        let two = T::one() + T::one();
        let half = T::one() / two;
        let three = two + T::one();

        let (mut a, mut b) = (a, b);
        let (mut fa, mut fb) = (f(a), f(b));

        if fa == T::zero() {
            return Ok(a);
        }
        if fb == T::zero() {
            return Ok(b);
        }
        if (fa > T::zero()) == (fb > T::zero()) {
            return Err(SolverError::NoBracket {
                a: as_f64(a),
                b: as_f64(b),
                fa: as_f64(fa),
                fb: as_f64(fb),
            });
        }

        let (mut c, mut fc) = (a, fa);
        let mut d = b - a;
        let mut e = d;

        for iteration in 0..self.config.max_iterations {
            if (fb > T::zero()) == (fc > T::zero()) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }
            // Keep b as the best estimate
            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }

            let tol = two * T::epsilon() * b.abs() + half * self.config.tolerance;
            let xm = half * (c - b);
            trace!(iteration, b = as_f64(b), fb = as_f64(fb), "brent step");

            if xm.abs() <= tol || fb == T::zero() {
                return Ok(b);
            }

            if e.abs() >= tol && fa.abs() > fb.abs() {
                let s = fb / fa;
                let (mut p, mut q) = if a == c {
                    (two * xm * s, T::one() - s)
                } else {
                    let q = fa / fc;
                    let r = fb / fc;
                    (
                        s * (two * xm * q * (q - r) - (b - a) * (r - T::one())),
                        (q - T::one()) * (r - T::one()) * (s - T::one()),
                    )
                };
                if p > T::zero() {
                    q = -q;
                } else {
                    p = -p;
                }
                let bound = (three * xm * q - (tol * q).abs()).min((e * q).abs());
                if two * p < bound {
                    // Interpolation accepted
                    e = d;
                    d = p / q;
                } else {
                    d = xm;
                    e = d;
                }
            } else {
                d = xm;
                e = d;
            }

            a = b;
            fa = fb;
            b = if d.abs() > tol {
                b + d
            } else if xm > T::zero() {
                b + tol
            } else {
                b - tol
            };
            fb = f(b);
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }
}

impl<T: Float> Default for BrentSolver<T> {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sqrt_two() {
        let solver = BrentSolver::<f64>::default();
        let root = solver.find_root(|x| x * x - 2.0, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_cubic_with_single_real_root() {
        // x³ - x - 2 has one real root near 1.5214
        let solver = BrentSolver::<f64>::default();
        let root = solver.find_root(|x| x * x * x - x - 2.0, 1.0, 2.0).unwrap();
        assert_abs_diff_eq!(root * root * root - root - 2.0, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(root, 1.521_379_706_8, epsilon = 1e-9);
    }

    #[test]
    fn test_root_at_endpoint() {
        let solver = BrentSolver::<f64>::default();
        assert_eq!(solver.find_root(|x| x - 1.0, 1.0, 3.0).unwrap(), 1.0);
        assert_eq!(solver.find_root(|x| x - 3.0, 1.0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_reversed_bracket() {
        let solver = BrentSolver::<f64>::default();
        let root = solver.find_root(|x| x.cos(), 2.0, 1.0).unwrap();
        assert_abs_diff_eq!(root, std::f64::consts::FRAC_PI_2, epsilon = 1e-10);
    }

    #[test]
    fn test_no_bracket() {
        let solver = BrentSolver::<f64>::default();
        let err = solver.find_root(|x| x * x + 1.0, -1.0, 1.0).unwrap_err();
        assert!(matches!(err, SolverError::NoBracket { .. }));
    }

    #[test]
    fn test_iteration_cap() {
        let solver = BrentSolver::new(SolverConfig::new(1e-15_f64, 1));
        let err = solver.find_root(|x| x.exp() - 10.0, 0.0, 10.0).unwrap_err();
        assert_eq!(err, SolverError::MaxIterationsExceeded { iterations: 1 });
    }

    #[test]
    fn test_invalid_config_rejected() {
        let solver = BrentSolver::new(SolverConfig::new(0.0_f64, 10));
        let err = solver.find_root(|x| x, -1.0, 1.0).unwrap_err();
        assert!(matches!(err, SolverError::InvalidConfig(_)));
    }

    #[test]
    fn test_f32_support() {
        let solver = BrentSolver::new(SolverConfig::new(1e-5_f32, 100));
        let root = solver.find_root(|x: f32| x * x - 4.0, 0.0, 5.0).unwrap();
        assert!((root - 2.0).abs() < 1e-4);
    }
}
