//! # cvd_core
//!
//! Callendar-Van Dusen resistance/temperature model for platinum RTDs.
//!
//! This crate holds the calibration standards, the polynomial model and the
//! root finders used to turn a measured resistance back into a temperature.
//!
//! ## Architecture Position
//!
//! Core layer of the workspace. Must not depend on `infra_config` or
//! `runtime_cli`.
//!
//! ## Modules
//! - `standard`: DIN43760 / American / ITS-90 coefficient tables
//! - `model`: forward polynomial, inversion with explicit root selection
//! - `range`: rated temperature range used to reject unphysical roots
//! - `math`: quadratic and bracketed root finders
//! - `error`: structured error types
//!
//! ## Example
//!
//! ```rust
//! use cvd_core::CallendarVanDusen;
//!
//! let model = CallendarVanDusen::from_name("DIN43760", false)?;
//! let t = model.temperature(500.0, 200.0)?;
//! assert!((t + 150.18).abs() < 0.01);
//! # Ok::<(), cvd_core::CvdError>(())
//! ```

pub mod error;
pub mod math;
pub mod model;
pub mod range;
pub mod standard;

pub use error::{CvdError, Result};
pub use model::{CallendarVanDusen, TablePoint, MAX_TABLE_POINTS};
pub use range::{RatedRange, RANGE_TOLERANCE};
pub use standard::{Coefficients, Standard};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::math::solvers::SolverConfig;
    pub use crate::{CallendarVanDusen, Coefficients, CvdError, RatedRange, Standard, TablePoint};
}
