//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to a
//! caller-supplied writer so they can be exercised without a terminal.

pub mod resistance;
pub mod standards;
pub mod table;
pub mod temperature;

use cvd_core::math::solvers::SolverConfig;
use cvd_core::{CallendarVanDusen, RatedRange};
use infra_config::Settings;
use tracing::info;

use crate::Result;

/// Build the calibration model described by `settings`.
pub fn build_model(settings: &Settings) -> Result<CallendarVanDusen> {
    let calibration = &settings.calibration;
    let range = RatedRange::new(settings.range.min_celsius, settings.range.max_celsius)?;
    let solver = SolverConfig::new(settings.solver.tolerance, settings.solver.max_iterations);

    let model = CallendarVanDusen::from_name(&calibration.standard, calibration.subzero)?
        .with_range(range)
        .with_solver_config(solver)?;

    info!(
        standard = %model.standard(),
        subzero = model.is_subzero(),
        min = range.min(),
        max = range.max(),
        "calibration model ready"
    );
    Ok(model)
}
