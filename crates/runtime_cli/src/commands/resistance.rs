//! Resistance command implementation
//!
//! Evaluates the forward polynomial at a given temperature.

use std::io::Write;

use clap::Args;
use cvd_core::CallendarVanDusen;
use infra_config::CalibrationConfig;

use crate::output::format_general;
use crate::Result;

/// Arguments for `cvd resistance`
#[derive(Debug, Args)]
pub struct ResistanceArgs {
    /// Temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Resistance at 0 °C in ohm [default: from settings]
    #[arg(long, allow_negative_numbers = true)]
    pub r0: Option<f64>,
}

/// Run the resistance command
pub fn run<W: Write>(
    model: &CallendarVanDusen,
    calibration: &CalibrationConfig,
    args: &ResistanceArgs,
    out: &mut W,
) -> Result<()> {
    let r0 = args.r0.unwrap_or(calibration.r0);
    let r = model.resistance(r0, args.temperature)?;

    writeln!(out, "Temperature = {}", format_general(args.temperature))?;
    writeln!(out, "Resistance = {}", format_general(r))?;
    Ok(())
}
