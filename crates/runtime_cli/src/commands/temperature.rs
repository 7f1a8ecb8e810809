//! Temperature command implementation
//!
//! Converts a measured resistance into a temperature. This is also what
//! runs when no subcommand is given.

use std::io::Write;

use clap::Args;
use cvd_core::CallendarVanDusen;
use infra_config::CalibrationConfig;

use crate::output::format_general;
use crate::Result;

/// Arguments for `cvd temperature`
#[derive(Debug, Args, Default)]
pub struct TemperatureArgs {
    /// Resistance at 0 °C in ohm [default: from settings]
    #[arg(long, allow_negative_numbers = true)]
    pub r0: Option<f64>,

    /// Measured resistance in ohm [default: from settings]
    #[arg(long, allow_negative_numbers = true)]
    pub resistance: Option<f64>,
}

/// Run the temperature command
pub fn run<W: Write>(
    model: &CallendarVanDusen,
    calibration: &CalibrationConfig,
    args: &TemperatureArgs,
    out: &mut W,
) -> Result<()> {
    let r0 = args.r0.unwrap_or(calibration.r0);
    let r_measured = args.resistance.unwrap_or(calibration.resistance);

    let t = model.temperature(r0, r_measured)?;

    writeln!(out, "Resistance = {}", format_general(r_measured))?;
    writeln!(out, "Temperature = {}", format_general(t))?;
    Ok(())
}
