//! cvd: platinum RTD resistance/temperature calculator
//!
//! Evaluates the Callendar-Van Dusen curve of a DIN43760, American or ITS-90
//! sensor in either direction.
//!
//! # Commands
//!
//! - `temperature` (default): resistance -> temperature
//! - `resistance`: temperature -> resistance
//! - `table`: resistance table over a temperature span
//! - `standards`: coefficient listing
//!
//! Results go to stdout; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use infra_config::Settings;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;
mod output;

pub use error::{CliError, CliExitCode, Result};

/// Platinum RTD calculator based on the Callendar-Van Dusen equation
#[derive(Parser)]
#[command(name = "cvd")]
#[command(version)]
#[command(about = "Platinum RTD resistance/temperature calculator (Callendar-Van Dusen)")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Settings file (TOML) layered over config/ and under CVD_* variables
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Calibration standard: DIN43760, American or ITS-90
    #[arg(long, global = true)]
    standard: Option<String>,

    /// Enable the subzero cubic term
    #[arg(long, global = true)]
    subzero: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Temperature from a measured resistance
    Temperature(commands::temperature::TemperatureArgs),
    /// Resistance at a given temperature
    Resistance(commands::resistance::ResistanceArgs),
    /// Resistance table over a temperature span
    Table(commands::table::TableArgs),
    /// List calibration standards and coefficients
    Standards,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => CliExitCode::Success.into(),
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("Error: {}", err);
            CliExitCode::from(&err).into()
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(standard) = cli.standard {
        settings.calibration.standard = standard;
    }
    if cli.subzero {
        settings.calibration.subzero = true;
    }

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Temperature(Default::default()));

    match command {
        Commands::Standards => commands::standards::run(out),
        Commands::Temperature(args) => {
            let model = commands::build_model(&settings)?;
            commands::temperature::run(&model, &settings.calibration, &args, out)
        }
        Commands::Resistance(args) => {
            let model = commands::build_model(&settings)?;
            commands::resistance::run(&model, &settings.calibration, &args, out)
        }
        Commands::Table(args) => {
            let model = commands::build_model(&settings)?;
            commands::table::run(&model, &settings.calibration, &args, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cvd_core::CvdError;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_temperature() {
        let cli = Cli::try_parse_from(["cvd"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.subzero);
        assert!(cli.standard.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cvd",
            "temperature",
            "--r0",
            "100",
            "--resistance",
            "60",
            "--standard",
            "ITS-90",
            "--subzero",
        ])
        .unwrap();
        assert_eq!(cli.standard.as_deref(), Some("ITS-90"));
        assert!(cli.subzero);
        match cli.command {
            Some(Commands::Temperature(args)) => {
                assert_eq!(args.r0, Some(100.0));
                assert_eq!(args.resistance, Some(60.0));
            }
            _ => panic!("expected temperature command"),
        }
    }

    #[test]
    fn test_negative_temperatures_parse() {
        let cli = Cli::try_parse_from(["cvd", "table", "--from", "-200", "--to", "0", "--step", "20"])
            .unwrap();
        match cli.command {
            Some(Commands::Table(args)) => {
                assert_eq!(args.from, Some(-200.0));
                assert_eq!(args.to, Some(0.0));
                assert_eq!(args.step, 20.0);
            }
            _ => panic!("expected table command"),
        }

        let cli = Cli::try_parse_from(["cvd", "resistance", "--temperature", "-40"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Resistance(ref a)) if a.temperature == -40.0));
    }

    #[test]
    fn test_negative_r0_parses() {
        let cli = Cli::try_parse_from(["cvd", "temperature", "--r0", "-1", "--resistance", "-5"])
            .unwrap();
        match cli.command {
            Some(Commands::Temperature(args)) => {
                assert_eq!(args.r0, Some(-1.0));
                assert_eq!(args.resistance, Some(-5.0));
            }
            _ => panic!("expected temperature command"),
        }

        let cli = Cli::try_parse_from(["cvd", "table", "--r0", "-100", "--step", "-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Table(ref a)) if a.r0 == Some(-100.0)));
    }

    #[test]
    fn test_unknown_standard_exits_with_configuration_code() {
        let cli = Cli::try_parse_from(["cvd", "--standard", "Foo"]).unwrap();
        let mut out = Vec::new();
        let err = execute(cli, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Model(CvdError::UnknownStandard(ref name)) if name == "Foo"));
        assert_eq!(CliExitCode::from(&err), CliExitCode::Configuration);
        assert!(out.is_empty());
    }

    #[test]
    fn test_negative_r0_exits_with_domain_code() {
        let cli = Cli::try_parse_from(["cvd", "temperature", "--r0", "-1"]).unwrap();
        let mut out = Vec::new();
        let err = execute(cli, &mut out).unwrap_err();
        assert_eq!(CliExitCode::from(&err), CliExitCode::Domain);
    }

    #[test]
    fn test_reading_beyond_range_exits_with_no_solution_code() {
        let cli = Cli::try_parse_from([
            "cvd",
            "temperature",
            "--r0",
            "100",
            "--resistance",
            "1000",
            "--subzero",
        ])
        .unwrap();
        let mut out = Vec::new();
        let err = execute(cli, &mut out).unwrap_err();
        assert_eq!(CliExitCode::from(&err), CliExitCode::NoSolution);
    }

    #[test]
    fn test_default_invocation_prints_reference_reading() {
        let cli = Cli::try_parse_from(["cvd"]).unwrap();
        let mut out = Vec::new();
        execute(cli, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Resistance = 200\nTemperature = -150.183\n"
        );
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["cvd", "-vv", "standards"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Standards)));
    }
}
