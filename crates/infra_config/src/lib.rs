//! # infra_config
//!
//! Runtime settings for the `cvd` tools.
//!
//! This crate loads the default calibration (standard, subzero flag, reading),
//! the rated temperature range and the root-finder tolerances from TOML files
//! and environment variables.
//!
//! ## Architecture Position
//!
//! Part of the infra layer. Must not depend on `cvd_core` or `runtime_cli`;
//! values are kept as plain data and validated into model types by callers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use infra_config::Settings;
//!
//! let settings = Settings::load(None)?;
//! println!("Standard: {}", settings.calibration.standard);
//! ```

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{CalibrationConfig, RangeConfig, Settings, SolverSettings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CalibrationConfig, ConfigError, RangeConfig, Settings, SolverSettings};
}
