//! The Callendar-Van Dusen calibration model.
//!
//! Relates the resistance `r` of a platinum RTD to its temperature `t` (°C):
//!
//! ```text
//! r = r0 · (1 + A·t + B·t² + C·(t − 100)³)
//! ```
//!
//! With `C = 0` the curve is the quadratic Callendar form and is inverted in
//! closed form. With `C ≠ 0` the cubic is inverted by Brent's method over the
//! part of the rated range on which the curve is strictly increasing.

use tracing::{debug, warn};

use crate::error::{CvdError, Result};
use crate::math::solvers::{quadratic_roots, small_root, BrentSolver, SolverConfig, SolverError};
use crate::range::{RatedRange, RANGE_TOLERANCE};
use crate::standard::{Coefficients, Standard};

/// Upper bound on the number of rows produced by [`CallendarVanDusen::table`].
pub const MAX_TABLE_POINTS: usize = 100_000;

/// One row of a resistance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePoint {
    /// Temperature (°C)
    pub temperature: f64,
    /// Resistance (ohm)
    pub resistance: f64,
}

/// Immutable calibration model for one standard.
///
/// # Examples
/// ```
/// use cvd_core::CallendarVanDusen;
///
/// let model = CallendarVanDusen::from_name("DIN43760", false).unwrap();
/// let t = model.temperature(100.0, 138.5).unwrap();
/// assert!((t - 100.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct CallendarVanDusen {
    standard: Standard,
    subzero: bool,
    coefficients: Coefficients,
    range: RatedRange,
    solver: BrentSolver<f64>,
}

impl CallendarVanDusen {
    /// Build a model for `standard`, with the cubic term active if `subzero`.
    pub fn new(standard: Standard, subzero: bool) -> Self {
        Self {
            standard,
            subzero,
            coefficients: standard.coefficients(subzero),
            range: RatedRange::default(),
            solver: BrentSolver::default(),
        }
    }

    /// Build a model from a standard name.
    ///
    /// # Errors
    /// `CvdError::UnknownStandard` if `name` is not a recognised standard.
    pub fn from_name(name: &str, subzero: bool) -> Result<Self> {
        let standard = name.parse::<Standard>()?;
        Ok(Self::new(standard, subzero))
    }

    /// Replace the rated range.
    pub fn with_range(mut self, range: RatedRange) -> Self {
        self.range = range;
        self
    }

    /// Replace the configuration of the cubic root finder.
    ///
    /// # Errors
    /// `CvdError::Solver` if the configuration is invalid.
    pub fn with_solver_config(mut self, config: SolverConfig<f64>) -> Result<Self> {
        config.validate()?;
        self.solver = BrentSolver::new(config);
        Ok(self)
    }

    /// Calibration standard.
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// Whether the subzero cubic term is enabled.
    pub fn is_subzero(&self) -> bool {
        self.subzero
    }

    /// Active coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Rated range used for root selection.
    pub fn range(&self) -> RatedRange {
        self.range
    }

    /// Resistance at temperature `t` for a sensor with resistance `r0` at 0 °C.
    ///
    /// # Errors
    /// `CvdError::InvalidInput` if `r0` is not positive or `t` is not finite.
    pub fn resistance(&self, r0: f64, t: f64) -> Result<f64> {
        check_r0(r0)?;
        if !t.is_finite() {
            return Err(CvdError::InvalidInput(format!(
                "temperature must be finite, got {}",
                t
            )));
        }
        Ok(r0 * self.ratio_at(t))
    }

    /// Slope `dr/dt` (ohm/°C) at temperature `t`.
    pub fn sensitivity(&self, r0: f64, t: f64) -> Result<f64> {
        check_r0(r0)?;
        if !t.is_finite() {
            return Err(CvdError::InvalidInput(format!(
                "temperature must be finite, got {}",
                t
            )));
        }
        let Coefficients { a, b, c } = self.coefficients;
        let shifted = t - 100.0;
        Ok(r0 * (a + 2.0 * b * t + 3.0 * c * shifted * shifted))
    }

    /// Temperature (°C) at which the sensor reads `r_measured`.
    ///
    /// The returned root is the one inside the rated range that passes through
    /// `t = 0` at `r_measured = r0`. For the quadratic form this is the small
    /// root of `B·t² + A·t + (1 − r/r0) = 0`; the other root sits thousands of
    /// degrees away and has no physical meaning.
    ///
    /// # Errors
    /// - `CvdError::InvalidInput` for non-positive or non-finite resistances
    /// - `CvdError::NoSolution` if no root lies inside the rated range
    pub fn temperature(&self, r0: f64, r_measured: f64) -> Result<f64> {
        check_r0(r0)?;
        if !r_measured.is_finite() || r_measured <= 0.0 {
            return Err(CvdError::InvalidInput(format!(
                "measured resistance must be positive and finite, got {}",
                r_measured
            )));
        }

        let ratio = r_measured / r0;
        let t = if self.coefficients.is_cubic() {
            self.solve_cubic(r0, r_measured, ratio)?
        } else {
            self.solve_quadratic(r0, r_measured, ratio)?
        };

        if !self.range.contains(t) {
            warn!(
                standard = %self.standard,
                r0,
                r_measured,
                t,
                "root outside rated range"
            );
            return Err(no_solution(
                r0,
                r_measured,
                format!(
                    "root {} °C lies outside the rated range [{}, {}] °C",
                    t,
                    self.range.min(),
                    self.range.max()
                ),
            ));
        }

        debug!(standard = %self.standard, subzero = self.subzero, r0, r_measured, t, "solved temperature");
        Ok(t)
    }

    /// Resistance table from `from` to `to` (inclusive) in steps of `step` °C.
    ///
    /// # Errors
    /// `CvdError::InvalidInput` for a non-positive step, reversed bounds, or
    /// more than [`MAX_TABLE_POINTS`] rows.
    pub fn table(&self, r0: f64, from: f64, to: f64, step: f64) -> Result<Vec<TablePoint>> {
        check_r0(r0)?;
        if !from.is_finite() || !to.is_finite() || from > to {
            return Err(CvdError::InvalidInput(format!(
                "table bounds must be finite with from <= to, got [{}, {}]",
                from, to
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(CvdError::InvalidInput(format!(
                "table step must be positive, got {}",
                step
            )));
        }

        let span = ((to - from) / step + 1e-9).floor();
        if span >= MAX_TABLE_POINTS as f64 {
            return Err(CvdError::InvalidInput(format!(
                "table would exceed {} rows",
                MAX_TABLE_POINTS
            )));
        }

        let rows = span as usize + 1;
        (0..rows)
            .map(|i| {
                let temperature = from + i as f64 * step;
                Ok(TablePoint {
                    temperature,
                    resistance: self.resistance(r0, temperature)?,
                })
            })
            .collect()
    }

    /// `r / r0` at temperature `t`.
    fn ratio_at(&self, t: f64) -> f64 {
        let Coefficients { a, b, c } = self.coefficients;
        let shifted = t - 100.0;
        1.0 + a * t + b * t * t + c * shifted * shifted * shifted
    }

    fn solve_quadratic(&self, r0: f64, r_measured: f64, ratio: f64) -> Result<f64> {
        let Coefficients { a, b, .. } = self.coefficients;
        debug!(ratio, "inverting quadratic form");
        small_root(b, a, 1.0 - ratio).map_err(|err| match err {
            SolverError::NegativeDiscriminant(_) => no_solution(
                r0,
                r_measured,
                "resistance exceeds the maximum of the quadratic curve".to_string(),
            ),
            other => other.into(),
        })
    }

    fn solve_cubic(&self, r0: f64, r_measured: f64, ratio: f64) -> Result<f64> {
        let (rise_lo, rise_hi) = self.rising_span();
        let lo = (self.range.min() - RANGE_TOLERANCE).max(rise_lo);
        let hi = (self.range.max() + RANGE_TOLERANCE).min(rise_hi);
        if lo >= hi {
            return Err(no_solution(
                r0,
                r_measured,
                format!(
                    "the curve is not increasing anywhere in the rated range [{}, {}] °C",
                    self.range.min(),
                    self.range.max()
                ),
            ));
        }

        debug!(
            ratio,
            lo,
            hi,
            max_iterations = self.solver.config().max_iterations,
            "inverting cubic form by bracketing"
        );
        match self.solver.find_root(|t| self.ratio_at(t) - ratio, lo, hi) {
            Ok(t) => Ok(t),
            Err(SolverError::NoBracket { .. }) => Err(no_solution(
                r0,
                r_measured,
                format!(
                    "resistance is outside [{}, {}] ohm spanned by the rated range",
                    r0 * self.ratio_at(lo),
                    r0 * self.ratio_at(hi)
                ),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Interval of `t` on which `r/r0` is strictly increasing.
    ///
    /// The slope `A + 2B·t + 3C·(t − 100)²` is a downward parabola when
    /// `C < 0`, positive between its two roots. With `C = 0` and `B < 0` it
    /// turns negative past `−A/(2B)`.
    fn rising_span(&self) -> (f64, f64) {
        let Coefficients { a, b, c } = self.coefficients;
        if c < 0.0 {
            match quadratic_roots(3.0 * c, 2.0 * b - 600.0 * c, a + 30_000.0 * c) {
                Ok([lo, hi]) => return (lo, hi),
                Err(err) => debug!(%err, "slope has no turning point"),
            }
        } else if c == 0.0 && b < 0.0 {
            return (f64::NEG_INFINITY, -a / (2.0 * b));
        }
        (f64::NEG_INFINITY, f64::INFINITY)
    }
}

impl Default for CallendarVanDusen {
    fn default() -> Self {
        Self::new(Standard::default(), false)
    }
}

fn check_r0(r0: f64) -> Result<()> {
    if !r0.is_finite() || r0 <= 0.0 {
        return Err(CvdError::InvalidInput(format!(
            "r0 must be positive and finite, got {}",
            r0
        )));
    }
    Ok(())
}

fn no_solution(r0: f64, resistance: f64, reason: String) -> CvdError {
    CvdError::NoSolution {
        resistance,
        r0,
        reason,
    }
}
