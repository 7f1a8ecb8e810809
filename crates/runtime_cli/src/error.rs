//! CLI error types and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Unexpected failure (I/O, solver breakdown)
//! - 2: Configuration error (bad settings file, unknown standard)
//! - 3: Domain error (non-physical input)
//! - 4: No solution inside the rated range

use std::process::ExitCode;

use cvd_core::CvdError;
use infra_config::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Model construction or evaluation failed
    #[error(transparent)]
    Model(#[from] CvdError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
    Configuration = 2,
    Domain = 3,
    NoSolution = 4,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&CliError> for CliExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::Config(_) => CliExitCode::Configuration,
            CliError::Model(CvdError::UnknownStandard(_)) => CliExitCode::Configuration,
            CliError::Model(CvdError::InvalidInput(_)) => CliExitCode::Domain,
            CliError::Model(CvdError::NoSolution { .. }) => CliExitCode::NoSolution,
            CliError::Model(CvdError::Solver(_)) => CliExitCode::Failure,
            CliError::Io(_) => CliExitCode::Failure,
        }
    }
}
