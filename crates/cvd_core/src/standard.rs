//! Calibration standards and their Callendar-Van Dusen coefficients.
//!
//! Coefficients follow the National Instruments RTD tutorial (AN046).

use std::fmt;
use std::str::FromStr;

use crate::error::CvdError;

/// Polynomial coefficients `(A, B, C)` of `r = r0·(1 + A·t + B·t² + C·(t − 100)³)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Linear term (1/°C)
    pub a: f64,
    /// Quadratic term (1/°C²)
    pub b: f64,
    /// Cubic term (1/°C³), zero unless subzero operation is enabled
    pub c: f64,
}

impl Coefficients {
    /// True when the cubic term is active.
    pub fn is_cubic(&self) -> bool {
        self.c != 0.0
    }
}

/// Recognised RTD calibration standard.
///
/// The set is closed: unknown names fail to parse with
/// [`CvdError::UnknownStandard`].
///
/// # Examples
/// ```
/// use cvd_core::Standard;
///
/// let standard: Standard = "ITS-90".parse().unwrap();
/// assert_eq!(standard, Standard::Its90);
/// assert_eq!(standard.to_string(), "ITS-90");
/// assert!("Foo".parse::<Standard>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Standard {
    /// DIN 43760 (European, alpha = 0.00385)
    #[default]
    Din43760,
    /// American curve (alpha = 0.003911)
    American,
    /// ITS-90 (alpha = 0.003926)
    Its90,
}

impl Standard {
    /// Every recognised standard, in display order.
    pub const ALL: [Standard; 3] = [Standard::Din43760, Standard::American, Standard::Its90];

    /// Canonical name as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Din43760 => "DIN43760",
            Standard::American => "American",
            Standard::Its90 => "ITS-90",
        }
    }

    /// Coefficients for this standard. `C` is zero unless `subzero` is set.
    pub fn coefficients(&self, subzero: bool) -> Coefficients {
        let (a, b, c) = match self {
            Standard::Din43760 => (3.9080e-3, -5.8019e-7, -4.2735e-12),
            Standard::American => (3.9692e-3, -5.8495e-7, -4.2325e-12),
            Standard::Its90 => (3.9848e-3, -5.870e-7, -4.0000e-12),
        };
        Coefficients {
            a,
            b,
            c: if subzero { c } else { 0.0 },
        }
    }

    /// Mean sensitivity `(R100 − R0) / (100·R0)` of the Callendar form.
    pub fn alpha(&self) -> f64 {
        let Coefficients { a, b, .. } = self.coefficients(false);
        a + 100.0 * b
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standard {
    type Err = CvdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Standard::ALL
            .into_iter()
            .find(|standard| standard.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CvdError::UnknownStandard(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_din_coefficients_without_subzero() {
        let coefficients = Standard::Din43760.coefficients(false);
        assert_eq!(coefficients.a, 3.9080e-3);
        assert_eq!(coefficients.b, -5.8019e-7);
        assert_eq!(coefficients.c, 0.0);
        assert!(!coefficients.is_cubic());
    }

    #[test]
    fn test_subzero_coefficients() {
        assert_eq!(Standard::Din43760.coefficients(true).c, -4.2735e-12);
        assert_eq!(Standard::American.coefficients(true).c, -4.2325e-12);
        assert_eq!(Standard::Its90.coefficients(true).c, -4.0000e-12);
        assert!(Standard::Its90.coefficients(true).is_cubic());
    }

    #[test]
    fn test_american_and_its90_values() {
        let american = Standard::American.coefficients(false);
        assert_eq!((american.a, american.b), (3.9692e-3, -5.8495e-7));
        let its90 = Standard::Its90.coefficients(false);
        assert_eq!((its90.a, its90.b), (3.9848e-3, -5.870e-7));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for standard in Standard::ALL {
            assert_eq!(standard.name().parse::<Standard>().unwrap(), standard);
            assert_eq!(standard.to_string(), standard.name());
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" din43760 ".parse::<Standard>().unwrap(), Standard::Din43760);
        assert_eq!("its-90".parse::<Standard>().unwrap(), Standard::Its90);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Foo".parse::<Standard>().unwrap_err();
        assert_eq!(err, CvdError::UnknownStandard("Foo".to_string()));
    }

    #[test]
    fn test_alpha() {
        assert_relative_eq!(Standard::Din43760.alpha(), 0.00385, max_relative = 1e-4);
        assert_relative_eq!(Standard::American.alpha(), 0.003911, max_relative = 1e-3);
        assert_relative_eq!(Standard::Its90.alpha(), 0.003926, max_relative = 1e-3);
    }

    #[test]
    fn test_default_is_din() {
        assert_eq!(Standard::default(), Standard::Din43760);
    }
}
