//! Settings and configuration structures.

use std::path::Path;

use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::debug;

/// Main application settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Settings {
    /// Default calibration and reading
    #[serde(default)]
    pub calibration: CalibrationConfig,
    /// Rated temperature range
    #[serde(default)]
    pub range: RangeConfig,
    /// Root-finder configuration
    #[serde(default)]
    pub solver: SolverSettings,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `CVD_ENV`)
    /// 3. `explicit`, if given (must exist)
    /// 4. Environment variables prefixed with `CVD_`, e.g. `CVD_CALIBRATION__STANDARD`
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var("CVD_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix("CVD").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        debug!(?settings, env = %env, "settings loaded");
        Ok(settings)
    }

    /// Parse settings from a TOML document, applying defaults for missing keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check range and solver values.
    ///
    /// Calibration values are left to the model, which reports unknown
    /// standards and non-physical readings with its own error classes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let RangeConfig {
            min_celsius,
            max_celsius,
        } = self.range;
        if !min_celsius.is_finite() || !max_celsius.is_finite() || min_celsius >= max_celsius {
            return Err(ConfigError::InvalidValue {
                key: "range".to_string(),
                message: format!(
                    "min_celsius ({}) must be below max_celsius ({})",
                    min_celsius, max_celsius
                ),
            });
        }
        if !(self.solver.tolerance > 0.0) || !self.solver.tolerance.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "solver.tolerance".to_string(),
                message: format!("must be positive, got {}", self.solver.tolerance),
            });
        }
        if self.solver.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                key: "solver.max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Calibration defaults used when the command line does not override them.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CalibrationConfig {
    /// Standard name (DIN43760, American, ITS-90)
    #[serde(default = "default_standard")]
    pub standard: String,
    /// Enable the subzero cubic term
    #[serde(default)]
    pub subzero: bool,
    /// Resistance at 0 °C (ohm)
    #[serde(default = "default_r0")]
    pub r0: f64,
    /// Measured resistance (ohm)
    #[serde(default = "default_resistance")]
    pub resistance: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            standard: default_standard(),
            subzero: false,
            r0: default_r0(),
            resistance: default_resistance(),
        }
    }
}

fn default_standard() -> String {
    "DIN43760".to_string()
}

fn default_r0() -> f64 {
    500.0
}

fn default_resistance() -> f64 {
    200.0
}

/// Rated temperature range (°C).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    /// Lower bound
    #[serde(default = "default_min_celsius")]
    pub min_celsius: f64,
    /// Upper bound
    #[serde(default = "default_max_celsius")]
    pub max_celsius: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min_celsius: default_min_celsius(),
            max_celsius: default_max_celsius(),
        }
    }
}

fn default_min_celsius() -> f64 {
    -200.0
}

fn default_max_celsius() -> f64 {
    850.0
}

/// Root-finder configuration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Absolute tolerance on the temperature (°C)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Maximum iterations of the bracketing solver
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-10
}

fn default_max_iterations() -> usize {
    100
}
