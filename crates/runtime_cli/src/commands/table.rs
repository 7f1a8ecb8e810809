//! Table command implementation

use std::io::Write;

use clap::Args;
use cvd_core::CallendarVanDusen;
use infra_config::CalibrationConfig;
use tracing::debug;

use crate::output::format_general;
use crate::Result;

/// Arguments for `cvd table`
#[derive(Debug, Args)]
pub struct TableArgs {
    /// First temperature in °C [default: lower end of the rated range]
    #[arg(long, allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// Last temperature in °C [default: upper end of the rated range]
    #[arg(long, allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Step in °C
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub step: f64,

    /// Resistance at 0 °C in ohm [default: from settings]
    #[arg(long, allow_negative_numbers = true)]
    pub r0: Option<f64>,
}

/// Run the table command: one `temperature<TAB>resistance` line per row.
pub fn run<W: Write>(
    model: &CallendarVanDusen,
    calibration: &CalibrationConfig,
    args: &TableArgs,
    out: &mut W,
) -> Result<()> {
    let range = model.range();
    let r0 = args.r0.unwrap_or(calibration.r0);
    let from = args.from.unwrap_or(range.min());
    let to = args.to.unwrap_or(range.max());

    let rows = model.table(r0, from, to, args.step)?;
    debug!(rows = rows.len(), from, to, step = args.step, "table computed");

    for row in rows {
        writeln!(
            out,
            "{}\t{}",
            format_general(row.temperature),
            format_general(row.resistance)
        )?;
    }
    Ok(())
}
