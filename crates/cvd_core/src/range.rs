//! Rated temperature range of a sensor.

use crate::error::{CvdError, Result};

/// Slack allowed when checking a solved temperature against the range (°C).
pub const RANGE_TOLERANCE: f64 = 1e-6;

/// Closed temperature interval `[min, max]` in °C over which the
/// resistance curve is trusted and monotonic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedRange {
    min: f64,
    max: f64,
}

impl RatedRange {
    /// Lower bound of platinum RTDs (°C).
    pub const PLATINUM_MIN: f64 = -200.0;
    /// Upper bound of platinum RTDs (°C).
    pub const PLATINUM_MAX: f64 = 850.0;

    /// Create a range, rejecting empty or non-finite intervals.
    ///
    /// # Examples
    /// ```
    /// use cvd_core::RatedRange;
    ///
    /// let range = RatedRange::new(-50.0, 150.0).unwrap();
    /// assert!(range.contains(25.0));
    /// assert!(RatedRange::new(10.0, 10.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CvdError::InvalidInput(format!(
                "rated range bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(CvdError::InvalidInput(format!(
                "rated range is empty: min {} >= max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Lower bound (°C).
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (°C).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// True if `t` is within the range, allowing [`RANGE_TOLERANCE`] slack.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.min - RANGE_TOLERANCE && t <= self.max + RANGE_TOLERANCE
    }
}

impl Default for RatedRange {
    fn default() -> Self {
        Self {
            min: Self::PLATINUM_MIN,
            max: Self::PLATINUM_MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_platinum_range() {
        let range = RatedRange::default();
        assert_eq!(range.min(), -200.0);
        assert_eq!(range.max(), 850.0);
    }

    #[test]
    fn test_contains_with_slack() {
        let range = RatedRange::default();
        assert!(range.contains(-200.0 - 1e-7));
        assert!(range.contains(850.0 + 1e-7));
        assert!(!range.contains(-200.1));
        assert!(!range.contains(850.1));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_rejects_invalid_bounds() {
        assert!(matches!(RatedRange::new(5.0, 1.0), Err(CvdError::InvalidInput(_))));
        assert!(RatedRange::new(f64::NEG_INFINITY, 1.0).is_err());
        assert!(RatedRange::new(0.0, f64::NAN).is_err());
    }
}
