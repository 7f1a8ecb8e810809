//! Closed-form quadratic roots without catastrophic cancellation.
//!
//! The textbook formula `(-b ± √(b² - 4ac)) / 2a` loses precision for the
//! root near zero when `|4ac| ≪ b²`, which is exactly the regime of an RTD
//! curve (`B` is four orders of magnitude smaller than `A`). Both helpers
//! go through `q = -(b + sign(b)·√Δ) / 2` and take `c / q` for that root.

use num_traits::Float;

use super::SolverError;

/// Root of `a·x² + b·x + c = 0` that tends to `-c / b` as `a → 0`.
///
/// This is the branch continuous with the linear solution, i.e. the one
/// passing through `x = 0` when `c = 0`. Works for `a = 0` as well.
///
/// # Errors
/// - `SolverError::NegativeDiscriminant` when no real root exists
/// - `SolverError::Degenerate` when `b = 0` and the branch is undefined
///
/// # Examples
/// ```
/// use cvd_core::math::solvers::small_root;
///
/// // x² - 1001x + 1000 = 0 has roots 1 and 1000
/// let x = small_root(1.0_f64, -1001.0, 1000.0).unwrap();
/// assert!((x - 1.0).abs() < 1e-12);
/// ```
pub fn small_root<T: Float>(a: T, b: T, c: T) -> Result<T, SolverError> {
    if b == T::zero() {
        return Err(SolverError::Degenerate);
    }
    if c == T::zero() {
        return Ok(T::zero());
    }
    let q = half_q(a, b, c)?;
    Ok(c / q)
}

/// Both real roots of `a·x² + b·x + c = 0`, in ascending order.
///
/// # Errors
/// - `SolverError::Degenerate` when `a = 0` (not a quadratic)
/// - `SolverError::NegativeDiscriminant` when no real root exists
pub fn quadratic_roots<T: Float>(a: T, b: T, c: T) -> Result<[T; 2], SolverError> {
    if a == T::zero() {
        return Err(SolverError::Degenerate);
    }
    let q = half_q(a, b, c)?;
    let x1 = q / a;
    let x2 = if q == T::zero() { x1 } else { c / q };
    Ok(if x1 <= x2 { [x1, x2] } else { [x2, x1] })
}

fn half_q<T: Float>(a: T, b: T, c: T) -> Result<T, SolverError> {
    let four = T::from(4.0).ok_or(SolverError::Degenerate)?;
    let half = T::from(0.5).ok_or(SolverError::Degenerate)?;

    let discriminant = b * b - four * a * c;
    if discriminant < T::zero() {
        return Err(SolverError::NegativeDiscriminant(
            discriminant.to_f64().unwrap_or(f64::NAN),
        ));
    }
    let root = discriminant.sqrt();
    let signed = if b >= T::zero() { root } else { -root };
    Ok(-half * (b + signed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_small_root_linear_limit() {
        let x = small_root(0.0_f64, 2.0, -4.0).unwrap();
        assert_relative_eq!(x, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_small_root_zero_constant() {
        assert_eq!(small_root(-5.8019e-7_f64, 3.9080e-3, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_small_root_avoids_cancellation() {
        // Roots 1e-8 and 1e8: the naive formula loses the small one entirely
        let x = small_root(1.0_f64, -(1e8 + 1e-8), 1.0).unwrap();
        assert_relative_eq!(x, 1e-8, max_relative = 1e-12);
    }

    #[test]
    fn test_small_root_negative_discriminant() {
        let err = small_root(1.0_f64, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, SolverError::NegativeDiscriminant(d) if d < 0.0));
    }

    #[test]
    fn test_small_root_degenerate() {
        assert_eq!(small_root(1.0_f64, 0.0, -1.0), Err(SolverError::Degenerate));
    }

    #[test]
    fn test_quadratic_roots_sorted() {
        // (x - 2)(x + 3) = x² + x - 6
        let [lo, hi] = quadratic_roots(1.0_f64, 1.0, -6.0).unwrap();
        assert_abs_diff_eq!(lo, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_roots_double_root() {
        // (x - 1)² = x² - 2x + 1
        let [lo, hi] = quadratic_roots(1.0_f64, -2.0, 1.0).unwrap();
        assert_abs_diff_eq!(lo, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_roots_contains_small_root() {
        let (a, b, c) = (-5.8019e-7_f64, 3.9080e-3, 0.6);
        let small = small_root(a, b, c).unwrap();
        let roots = quadratic_roots(a, b, c).unwrap();
        assert!(roots.iter().any(|r| (r - small).abs() < 1e-9));
    }

    #[test]
    fn test_quadratic_roots_not_quadratic() {
        assert_eq!(quadratic_roots(0.0_f64, 1.0, 1.0), Err(SolverError::Degenerate));
    }
}
