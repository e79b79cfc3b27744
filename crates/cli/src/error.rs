//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `LoadError` and `SpawnError` variants to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by the error types' Display).
//! - The wrapped command's own exit status (propagated as-is by `exec`).
//!
//! Invariants:
//! - Codes 1-3 are reserved for dotenv-safe's own failure categories.
//! - Codes 126 and 127 follow the shell convention for commands that cannot run.

use dotenv_safe_config::LoadError;

use crate::exec::SpawnError;

/// Structured exit codes for dotenv-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - every required variable is set.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// An env or template file could not be read.
    FileError = 2,

    /// A required variable is not set.
    ///
    /// Scripts should fix the deployment environment and re-run.
    MissingVariable = 3,

    /// The wrapped command exists but could not be executed.
    CommandNotExecutable = 126,

    /// The wrapped command was not found.
    CommandNotFound = 127,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::Filesystem { .. } => ExitCode::FileError,
            LoadError::Validation { .. } => ExitCode::MissingVariable,
        }
    }
}

impl From<&SpawnError> for ExitCode {
    fn from(err: &SpawnError) -> Self {
        match err {
            SpawnError::NotFound { .. } => ExitCode::CommandNotFound,
            SpawnError::Failed { .. } => ExitCode::CommandNotExecutable,
        }
    }
}

/// Extension trait to extract exit codes from anyhow errors.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(load_err) = cause.downcast_ref::<LoadError>() {
                return ExitCode::from(load_err);
            }
            if let Some(spawn_err) = cause.downcast_ref::<SpawnError>() {
                return ExitCode::from(spawn_err);
            }
        }

        ExitCode::GeneralError
    }
}
